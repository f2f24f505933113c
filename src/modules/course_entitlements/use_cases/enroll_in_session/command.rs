use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollInSession {
    pub request_id: Uuid,
    pub selected_session_id: Option<String>,
}
