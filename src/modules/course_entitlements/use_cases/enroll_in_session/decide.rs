use crate::modules::course_entitlements::core::ports::EnrollmentRequest;
use crate::modules::course_entitlements::core::state::EntitlementState;
use crate::modules::course_entitlements::use_cases::enroll_in_session::{
    command::EnrollInSession,
    decision::{DecideError, Decision},
};

pub fn decide_enroll(state: &EntitlementState, command: EnrollInSession) -> Decision {
    let Some(session_id) = command.selected_session_id.filter(|id| !id.is_empty()) else {
        return Decision::Rejected {
            reason: DecideError::NoSessionSelected,
        };
    };
    if state.current_session_id.as_deref() == Some(session_id.as_str()) {
        return Decision::Rejected {
            reason: DecideError::AlreadyEnrolled,
        };
    }
    if state.session(&session_id).is_none() {
        return Decision::Rejected {
            reason: DecideError::UnknownSession(session_id),
        };
    }

    Decision::Accepted {
        request: EnrollmentRequest {
            request_id: command.request_id,
            session_id,
            entitlement_id: state.entitlement_id.clone(),
            learner_id: state.learner_id.clone(),
        },
    }
}
