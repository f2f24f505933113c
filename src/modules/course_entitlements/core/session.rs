use serde::Serialize;

use crate::modules::course_entitlements::core::session_dates::format_date_range;

/// One scheduled offering of a course that an entitlement can be redeemed against.
///
/// `start_date` and `end_date` are kept exactly as the server sent them;
/// `display_date_range` is derived from them and never authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub session_id: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub display_date_range: String,
}

impl Session {
    pub fn new(
        session_id: impl Into<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Self {
        let display_date_range = format_date_range(start_date.as_deref(), end_date.as_deref());
        Self {
            session_id: session_id.into(),
            start_date,
            end_date,
            display_date_range,
        }
    }
}
