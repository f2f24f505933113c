// Ports define what the panel needs from the outside world, without implementing it.
//
// - EnrollmentClient: the enrollment service reached over HTTP.
// - PanelView: the render sink owned by the containing page.
// - SessionSelector: read access to the session select control.
//
// Adapters implement these traits in the adapters layer.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::course_entitlements::core::enroll_button::EnrollButton;
use crate::modules::course_entitlements::core::state::EntitlementState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentRequest {
    pub request_id: Uuid,
    pub session_id: String,
    pub entitlement_id: String,
    pub learner_id: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnrollmentError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("enrollment rejected with status {status}")]
    Rejected { status: u16 },

    #[error("enrollment timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait EnrollmentClient: Send + Sync {
    async fn enroll(&self, request: &EnrollmentRequest) -> Result<(), EnrollmentError>;
}

/// What the course card date field shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateDisplay {
    /// Busy indicator while an enrollment request is outstanding.
    Pending,
    /// Dates of the session the learner is enrolled in (empty when none).
    Dates(String),
    /// Dates of a session the learner was just enrolled into.
    Confirmed(String),
}

pub trait PanelView: Send + Sync {
    fn render(&self, state: &EntitlementState);
    fn set_enroll_button(&self, button: &EnrollButton);
    fn set_panel_open(&self, open: bool);
    fn focus_session_select(&self);
    fn set_date_display(&self, display: &DateDisplay);
    fn reveal_enter_course(&self, href: &str);
    fn reveal_open_trigger(&self);
    fn notify_error(&self, message: &str);
}

pub trait SessionSelector: Send + Sync {
    /// `None` when the placeholder option (no session) is selected.
    fn selected_session_id(&self) -> Option<String>;
}
