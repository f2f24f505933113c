use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use crate::modules::course_entitlements::core::events::EntitlementEvent;
use crate::modules::course_entitlements::core::events::v1::session_enrolled::SessionEnrolledV1;
use crate::modules::course_entitlements::core::ports::{
    EnrollmentClient, EnrollmentError, EnrollmentRequest,
};

pub struct EnrollInSessionHandler<TClient>
where
    TClient: EnrollmentClient + 'static,
{
    client: Arc<TClient>,
    timeout: Duration,
}

impl<TClient> EnrollInSessionHandler<TClient>
where
    TClient: EnrollmentClient + 'static,
{
    pub fn new(client: Arc<TClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Submits one enrollment request. A request that does not settle within the configured
    /// timeout counts as a failure.
    pub async fn handle(
        &self,
        request: &EnrollmentRequest,
    ) -> Result<EntitlementEvent, EnrollmentError> {
        tracing::info!(
            request_id = %request.request_id,
            entitlement_id = %request.entitlement_id,
            session_id = %request.session_id,
            "submitting enrollment request"
        );

        match tokio::time::timeout(self.timeout, self.client.enroll(request)).await {
            Ok(Ok(())) => Ok(EntitlementEvent::SessionEnrolledV1(SessionEnrolledV1 {
                entitlement_id: request.entitlement_id.clone(),
                learner_id: request.learner_id.clone(),
                session_id: request.session_id.clone(),
                enrolled_at: Utc::now().timestamp_millis(),
            })),
            Ok(Err(error)) => Err(error),
            Err(_) => Err(EnrollmentError::Timeout(self.timeout)),
        }
    }
}
