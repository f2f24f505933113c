use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::modules::course_entitlements::core::ports::{
    EnrollmentClient, EnrollmentError, EnrollmentRequest,
};

#[derive(Serialize)]
struct CourseDetails<'a> {
    course_id: &'a str,
    course_uuid: &'a str,
}

#[derive(Serialize)]
struct EnrollBody<'a> {
    course_details: CourseDetails<'a>,
    user: &'a str,
}

/// Posts enrollment requests to the enrollment service. Any 2xx counts as success.
#[derive(Debug, Clone)]
pub struct HttpEnrollmentClient {
    client: Client,
    enroll_url: String,
}

impl HttpEnrollmentClient {
    pub fn new(enroll_url: impl Into<String>) -> Result<Self, EnrollmentError> {
        let client = Client::builder()
            .build()
            .map_err(|e| EnrollmentError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, enroll_url))
    }

    pub fn with_client(client: Client, enroll_url: impl Into<String>) -> Self {
        Self {
            client,
            enroll_url: enroll_url.into(),
        }
    }
}

#[async_trait]
impl EnrollmentClient for HttpEnrollmentClient {
    async fn enroll(&self, request: &EnrollmentRequest) -> Result<(), EnrollmentError> {
        let body = EnrollBody {
            course_details: CourseDetails {
                course_id: &request.session_id,
                course_uuid: &request.entitlement_id,
            },
            user: &request.learner_id,
        };

        let response = self
            .client
            .post(&self.enroll_url)
            .header("X-Request-ID", request.request_id.to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| EnrollmentError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!(
                request_id = %request.request_id,
                status = status.as_u16(),
                "enrollment service rejected the request"
            );
            Err(EnrollmentError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
