use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnrollLabel {
    EnrollInSession,
    ChangeSession,
    LeaveCurrentSession,
}

impl EnrollLabel {
    pub fn text(self) -> &'static str {
        match self {
            EnrollLabel::EnrollInSession => "Enroll in Session",
            EnrollLabel::ChangeSession => "Change Session",
            EnrollLabel::LeaveCurrentSession => "Leave Current Session",
        }
    }
}

/// Text of the two-step confirmation shown before an enrollment is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfirmationPrompt {
    Enroll,
    ChangeSession,
    Unenroll,
}

impl ConfirmationPrompt {
    pub fn text(self) -> &'static str {
        match self {
            ConfirmationPrompt::Enroll => {
                "Are you sure that you would like to enroll in this session?"
            }
            ConfirmationPrompt::ChangeSession => {
                "Are you sure that you would like to change session?"
            }
            ConfirmationPrompt::Unenroll => {
                "Are you sure that you would like to unenroll from this session?"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnrollButton {
    pub enabled: bool,
    pub label: EnrollLabel,
    pub confirmation: ConfirmationPrompt,
}

impl EnrollButton {
    /// Same label and prompt, forced into the disabled state.
    pub fn disabled(self) -> Self {
        Self {
            enabled: false,
            ..self
        }
    }
}
