use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Duration;

use crate::modules::course_entitlements::adapters::inbound::panel::{EntitlementPanel, PanelError};
use crate::modules::course_entitlements::adapters::outbound::enrollment_client_in_memory::InMemoryEnrollmentClient;
use crate::modules::course_entitlements::core::enroll_button::EnrollLabel;
use crate::modules::course_entitlements::core::session::Session;
use crate::modules::course_entitlements::use_cases::enroll_in_session::handler::EnrollInSessionHandler;
use crate::shell::bootstrap::build_panel;
use crate::shell::config::PanelConfig;
use crate::tests::fixtures::enrollment_endpoint::spawn_enrollment_endpoint;
use crate::tests::fixtures::entitlement_state::EntitlementStateBuilder;
use crate::tests::fixtures::panel_doubles::{FixedSessionSelector, RecordingPanelView};

fn options_json(current_session_id: &str, session_ids: &[&str]) -> String {
    let sessions: Vec<_> = session_ids
        .iter()
        .map(|id| serde_json::json!({ "sessionId": id, "startDate": "2018-01-05" }))
        .collect();
    serde_json::json!({
        "entitlementId": "ent-e2e",
        "learnerId": "learner-e2e",
        "currentSessionId": current_session_id,
        "availableSessions": sessions,
    })
    .to_string()
}

fn config(enroll_url: &str) -> PanelConfig {
    PanelConfig {
        enroll_url: enroll_url.to_string(),
        enroll_timeout: Duration::from_secs(5),
        course_home_url: "/courses/{session_id}/course/".into(),
    }
}

#[tokio::test]
async fn first_enrollment_posts_once_and_updates_the_state() {
    let endpoint = spawn_enrollment_endpoint(StatusCode::OK).await;
    let view = Arc::new(RecordingPanelView::new());
    let selector = Arc::new(FixedSessionSelector::new());
    let panel = build_panel(
        &config(&endpoint.url),
        &options_json("", &["A"]),
        view.clone(),
        selector.clone(),
    )
    .unwrap();

    panel.open_panel().await;
    selector.select(Some("A"));
    let button = panel.on_session_selected().await;
    assert!(button.enabled);
    assert_eq!(button.label, EnrollLabel::EnrollInSession);

    panel.confirm_enrollment().await.expect("enrollment failed");

    let received = endpoint.received().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].body["course_details"]["course_id"], "A");
    assert_eq!(received[0].body["course_details"]["course_uuid"], "ent-e2e");
    assert_eq!(received[0].body["user"], "learner-e2e");
    assert_eq!(panel.state().await.current_session_id.as_deref(), Some("A"));

    selector.select(Some("A"));
    let button = panel.on_session_selected().await;
    assert!(!button.enabled);
    assert_eq!(button.label, EnrollLabel::ChangeSession);
}

#[tokio::test]
async fn reselecting_the_current_session_disables_the_button() {
    let view = Arc::new(RecordingPanelView::new());
    let selector = Arc::new(FixedSessionSelector::new());
    let panel = build_panel(
        &config("http://127.0.0.1:1/enroll"),
        &options_json("A", &["A", "B"]),
        view,
        selector.clone(),
    )
    .unwrap();

    selector.select(Some("A"));
    let button = panel.on_session_selected().await;

    assert!(!button.enabled);
    assert_eq!(button.label, EnrollLabel::ChangeSession);
    assert_eq!(button.label.text(), "Change Session");
}

#[tokio::test]
async fn failed_change_keeps_the_current_session_and_allows_retry() {
    let endpoint = spawn_enrollment_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
    let view = Arc::new(RecordingPanelView::new());
    let selector = Arc::new(FixedSessionSelector::new());
    let panel = build_panel(
        &config(&endpoint.url),
        &options_json("A", &["A", "B"]),
        view.clone(),
        selector.clone(),
    )
    .unwrap();

    selector.select(Some("B"));
    let result = panel.confirm_enrollment().await;

    assert!(matches!(result, Err(PanelError::Enrollment(_))));
    assert_eq!(endpoint.received().await.len(), 1);
    assert_eq!(panel.state().await.current_session_id.as_deref(), Some("A"));
    assert_eq!(view.errors().len(), 1);
    assert_eq!(view.last_button().map(|b| b.enabled), Some(true));
    assert!(!panel.is_in_flight());

    let retry = panel.confirm_enrollment().await;
    assert!(matches!(retry, Err(PanelError::Enrollment(_))));
    assert_eq!(endpoint.received().await.len(), 2);
}

#[tokio::test]
async fn second_confirmation_while_in_flight_makes_no_request() {
    let mut client = InMemoryEnrollmentClient::new();
    client.set_delay_ms(100);
    let client = Arc::new(client);
    let view = Arc::new(RecordingPanelView::new());
    let selector = Arc::new(FixedSessionSelector::new());
    let panel = EntitlementPanel::new(
        EntitlementStateBuilder::new()
            .sessions(vec![
                Session::new("A", None, None),
                Session::new("B", None, None),
            ])
            .build(),
        EnrollInSessionHandler::new(client.clone(), Duration::from_secs(5)),
        view,
        selector.clone(),
        "/courses/{session_id}/course/",
    );
    selector.select(Some("A"));

    let (first, second) = tokio::join!(panel.confirm_enrollment(), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(panel.is_in_flight());
        panel.confirm_enrollment().await
    });

    assert_eq!(first, Ok("A".to_string()));
    assert_eq!(second, Err(PanelError::RequestInFlight));
    assert_eq!(client.requests().await.len(), 1);
    assert!(!panel.is_in_flight());
}
