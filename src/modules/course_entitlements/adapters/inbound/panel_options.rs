// Construction data handed over by the containing page.
//
// Accepts both the camelCase keys and the dashboard's legacy keys (`entitlementUUID`, `userId`,
// `session_id`, `session_start`, `session_end`). `availableSessions` may arrive as a list or as
// a JSON encoded string of that list.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::modules::course_entitlements::core::session::Session;
use crate::modules::course_entitlements::core::state::{EntitlementState, IntegrityError};

#[derive(Debug, Error)]
pub enum PanelOptionsError {
    #[error("invalid panel options: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOption {
    #[serde(alias = "session_id", deserialize_with = "id_string")]
    pub session_id: String,
    #[serde(default, alias = "session_start")]
    pub start_date: Option<String>,
    #[serde(default, alias = "session_end")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AvailableSessions {
    List(Vec<SessionOption>),
    Encoded(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOptions {
    #[serde(alias = "entitlementUUID", deserialize_with = "id_string")]
    pub entitlement_id: String,
    #[serde(alias = "userId", deserialize_with = "id_string")]
    pub learner_id: String,
    #[serde(default)]
    pub current_session_id: Option<String>,
    pub available_sessions: AvailableSessions,
}

impl PanelOptions {
    pub fn from_json(raw: &str) -> Result<Self, PanelOptionsError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn into_state(self) -> Result<EntitlementState, PanelOptionsError> {
        let sessions = match self.available_sessions {
            AvailableSessions::List(sessions) => sessions,
            AvailableSessions::Encoded(raw) => serde_json::from_str(&raw)?,
        };
        let sessions = sessions
            .into_iter()
            .map(|s| Session::new(s.session_id, s.start_date, s.end_date))
            .collect();
        Ok(EntitlementState::new(
            self.entitlement_id,
            self.learner_id,
            self.current_session_id,
            sessions,
        )?)
    }
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}
