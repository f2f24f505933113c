use anyhow::Context;
use std::sync::Arc;

use crate::modules::course_entitlements::adapters::inbound::panel::EntitlementPanel;
use crate::modules::course_entitlements::adapters::inbound::panel_options::PanelOptions;
use crate::modules::course_entitlements::adapters::outbound::enrollment_client_http::HttpEnrollmentClient;
use crate::modules::course_entitlements::core::ports::{PanelView, SessionSelector};
use crate::modules::course_entitlements::use_cases::enroll_in_session::handler::EnrollInSessionHandler;
use crate::shell::config::PanelConfig;

pub type HttpEntitlementPanel<TView, TSelector> =
    EntitlementPanel<HttpEnrollmentClient, TView, TSelector>;

/// Builds a panel from the page's construction JSON. Integrity violations in the supplied data
/// are logged and returned; the page decides how to degrade.
pub fn build_panel<TView, TSelector>(
    config: &PanelConfig,
    options_json: &str,
    view: Arc<TView>,
    selector: Arc<TSelector>,
) -> anyhow::Result<HttpEntitlementPanel<TView, TSelector>>
where
    TView: PanelView,
    TSelector: SessionSelector,
{
    let state = PanelOptions::from_json(options_json)
        .and_then(PanelOptions::into_state)
        .inspect_err(|error| tracing::error!(%error, "entitlement panel data rejected"))
        .context("failed to load entitlement panel data")?;

    let client = Arc::new(HttpEnrollmentClient::new(&config.enroll_url)?);
    let handler = EnrollInSessionHandler::new(client, config.enroll_timeout);

    tracing::debug!(
        entitlement_id = %state.entitlement_id,
        sessions = state.available_sessions.len(),
        "entitlement panel ready"
    );
    Ok(EntitlementPanel::new(
        state,
        handler,
        view,
        selector,
        config.course_home_url.clone(),
    ))
}
