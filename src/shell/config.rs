use std::time::Duration;
use thiserror::Error;

pub const ENROLL_URL: &str = "ENTITLEMENT_ENROLL_URL";
pub const ENROLL_TIMEOUT_MS: &str = "ENTITLEMENT_ENROLL_TIMEOUT_MS";
pub const COURSE_HOME_URL: &str = "ENTITLEMENT_COURSE_HOME_URL";

const DEFAULT_ENROLL_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_COURSE_HOME_URL: &str = "/courses/{session_id}/course/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub enroll_url: String,
    pub enroll_timeout: Duration,
    pub course_home_url: String,
}

impl PanelConfig {
    /// Reads the configuration from the process environment, after loading a `.env` file when
    /// one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let enroll_url = lookup(ENROLL_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ENROLL_URL))?;

        let enroll_timeout = match lookup(ENROLL_TIMEOUT_MS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: ENROLL_TIMEOUT_MS,
                        value: raw,
                    });
                }
            },
            None => Duration::from_millis(DEFAULT_ENROLL_TIMEOUT_MS),
        };

        let course_home_url =
            lookup(COURSE_HOME_URL).unwrap_or_else(|| DEFAULT_COURSE_HOME_URL.to_string());

        Ok(Self {
            enroll_url,
            enroll_timeout,
            course_home_url,
        })
    }
}
