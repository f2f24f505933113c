// In memory implementation of the EnrollmentClient port.
//
// Purpose
// - Support panel and handler tests and local development without an enrollment service.
//
// Responsibilities
// - Record every request it receives, before any simulated delay or failure.
// - Simulate an offline service, a rejecting service and a slow service.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::modules::course_entitlements::core::ports::{
    EnrollmentClient, EnrollmentError, EnrollmentRequest,
};

#[derive(Default)]
pub struct InMemoryEnrollmentClient {
    requests: Mutex<Vec<EnrollmentRequest>>,
    offline: bool,
    rejected_status: Option<u16>,
    delay_ms: u64,
}

impl InMemoryEnrollmentClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn reject_with(&mut self, status: u16) {
        self.rejected_status = Some(status);
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub async fn requests(&self) -> Vec<EnrollmentRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl EnrollmentClient for InMemoryEnrollmentClient {
    async fn enroll(&self, request: &EnrollmentRequest) -> Result<(), EnrollmentError> {
        self.requests.lock().await.push(request.clone());
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if self.offline {
            return Err(EnrollmentError::Transport(
                "Enrollment service offline".into(),
            ));
        }
        if let Some(status) = self.rejected_status {
            return Err(EnrollmentError::Rejected { status });
        }
        Ok(())
    }
}
