pub mod v1 {
    pub mod session_enrolled;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum EntitlementEvent {
    SessionEnrolledV1(v1::session_enrolled::SessionEnrolledV1),
}
