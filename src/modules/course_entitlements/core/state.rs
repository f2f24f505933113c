// EntitlementState is the single source of truth for the panel's render decisions.
//
// Boundaries
// - No input or output here.
// - Only `evolve` produces a changed state, and only from a SessionEnrolled event.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::modules::course_entitlements::core::session::Session;
use crate::modules::course_entitlements::core::session_dates::format_session_dates;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("current session {0} is not among the available sessions")]
    UnknownCurrentSession(String),

    #[error("session {0} is listed more than once")]
    DuplicateSession(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitlementState {
    pub entitlement_id: String,
    pub learner_id: String,
    pub current_session_id: Option<String>,
    pub available_sessions: Vec<Session>,
}

impl EntitlementState {
    /// Builds the state from server supplied data. An empty `current_session_id` means
    /// "not enrolled yet". Display ranges are recomputed for every session.
    pub fn new(
        entitlement_id: impl Into<String>,
        learner_id: impl Into<String>,
        current_session_id: Option<String>,
        available_sessions: Vec<Session>,
    ) -> Result<Self, IntegrityError> {
        let current_session_id = current_session_id.filter(|id| !id.is_empty());

        let mut seen = HashSet::new();
        for session in &available_sessions {
            if !seen.insert(session.session_id.as_str()) {
                return Err(IntegrityError::DuplicateSession(
                    session.session_id.clone(),
                ));
            }
        }
        if let Some(id) = &current_session_id {
            if !seen.contains(id.as_str()) {
                return Err(IntegrityError::UnknownCurrentSession(id.clone()));
            }
        }

        Ok(Self {
            entitlement_id: entitlement_id.into(),
            learner_id: learner_id.into(),
            current_session_id,
            available_sessions: format_session_dates(available_sessions),
        })
    }

    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.available_sessions
            .iter()
            .find(|session| session.session_id == session_id)
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current_session_id
            .as_deref()
            .and_then(|id| self.session(id))
    }

    pub fn is_enrolled(&self) -> bool {
        self.current_session_id.is_some()
    }
}
