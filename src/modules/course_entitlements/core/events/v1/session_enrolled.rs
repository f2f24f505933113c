use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionEnrolledV1 {
    pub entitlement_id: String,
    pub learner_id: String,
    pub session_id: String,
    pub enrolled_at: i64,
}
