use crate::modules::course_entitlements::core::events::EntitlementEvent;
use crate::modules::course_entitlements::core::state::EntitlementState;

pub fn evolve(state: EntitlementState, event: EntitlementEvent) -> EntitlementState {
    match event {
        EntitlementEvent::SessionEnrolledV1(e)
            if e.entitlement_id == state.entitlement_id && state.session(&e.session_id).is_some() =>
        {
            EntitlementState {
                current_session_id: Some(e.session_id),
                ..state
            }
        }
        _ => state,
    }
}
