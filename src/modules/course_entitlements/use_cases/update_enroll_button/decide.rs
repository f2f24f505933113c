// Pure decision for the enroll control.
//
// - Disabled when the selection is the session already enrolled in, or when there is neither a
//   selection nor a current session.
// - Label and confirmation prompt depend only on which of the two ids are present.

use crate::modules::course_entitlements::core::enroll_button::{
    ConfirmationPrompt, EnrollButton, EnrollLabel,
};

pub fn decide_enroll_button(
    current_session_id: Option<&str>,
    selected_session_id: Option<&str>,
) -> EnrollButton {
    let current = current_session_id.filter(|id| !id.is_empty());
    let selected = selected_session_id.filter(|id| !id.is_empty());

    let enabled = match (current, selected) {
        (None, None) => false,
        (Some(current), Some(selected)) => current != selected,
        _ => true,
    };

    let (label, confirmation) = match (current, selected) {
        (_, None) => (EnrollLabel::LeaveCurrentSession, ConfirmationPrompt::Unenroll),
        (Some(_), Some(_)) => (EnrollLabel::ChangeSession, ConfirmationPrompt::ChangeSession),
        (None, Some(_)) => (EnrollLabel::EnrollInSession, ConfirmationPrompt::Enroll),
    };

    EnrollButton {
        enabled,
        label,
        confirmation,
    }
}
