use crate::modules::course_entitlements::core::ports::EnrollmentRequest;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("no session selected; leaving a session is not supported")]
    NoSessionSelected,

    #[error("already enrolled in the selected session")]
    AlreadyEnrolled,

    #[error("session {0} is not available for this entitlement")]
    UnknownSession(String),
}

#[derive(Debug)]
pub enum Decision {
    Accepted { request: EnrollmentRequest },
    Rejected { reason: DecideError },
}
