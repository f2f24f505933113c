// Entitlement panel controller: the inbound side of the widget.
//
// Responsibilities
// - Translate UI events (open/close, selector change, confirm) into decisions.
// - Keep at most one enrollment request in flight per panel.
// - Apply a successful enrollment to the state through `evolve`, and nothing else.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::course_entitlements::core::enroll_button::EnrollButton;
use crate::modules::course_entitlements::core::evolve::evolve;
use crate::modules::course_entitlements::core::ports::{
    DateDisplay, EnrollmentClient, EnrollmentError, PanelView, SessionSelector,
};
use crate::modules::course_entitlements::core::state::EntitlementState;
use crate::modules::course_entitlements::use_cases::enroll_in_session::command::EnrollInSession;
use crate::modules::course_entitlements::use_cases::enroll_in_session::decide::decide_enroll;
use crate::modules::course_entitlements::use_cases::enroll_in_session::decision::{
    DecideError, Decision,
};
use crate::modules::course_entitlements::use_cases::enroll_in_session::handler::EnrollInSessionHandler;
use crate::modules::course_entitlements::use_cases::update_enroll_button::decide::decide_enroll_button;

pub const ENROLLMENT_FAILED_NOTICE: &str =
    "There was an error enrolling in the selected session. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("an enrollment request is already in flight")]
    RequestInFlight,

    #[error("enrollment rejected: {0}")]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),
}

pub struct EntitlementPanel<TClient, TView, TSelector>
where
    TClient: EnrollmentClient + 'static,
    TView: PanelView,
    TSelector: SessionSelector,
{
    state: RwLock<EntitlementState>,
    handler: EnrollInSessionHandler<TClient>,
    view: Arc<TView>,
    selector: Arc<TSelector>,
    course_home_url: String,
    open: AtomicBool,
    in_flight: AtomicBool,
}

impl<TClient, TView, TSelector> EntitlementPanel<TClient, TView, TSelector>
where
    TClient: EnrollmentClient + 'static,
    TView: PanelView,
    TSelector: SessionSelector,
{
    /// Binds the panel to its state and collaborators and renders it once. The panel starts
    /// closed. `course_home_url` may contain `{session_id}`.
    pub fn new(
        state: EntitlementState,
        handler: EnrollInSessionHandler<TClient>,
        view: Arc<TView>,
        selector: Arc<TSelector>,
        course_home_url: impl Into<String>,
    ) -> Self {
        view.render(&state);
        Self {
            state: RwLock::new(state),
            handler,
            view,
            selector,
            course_home_url: course_home_url.into(),
            open: AtomicBool::new(false),
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn state(&self) -> EntitlementState {
        self.state.read().await.clone()
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Recomputes the enroll control from the current session and the selector, and writes it
    /// to the view. The control stays disabled while a request is in flight.
    pub async fn refresh_enroll_button(&self) -> EnrollButton {
        let selected = self.selector.selected_session_id();
        let button = {
            let state = self.state.read().await;
            decide_enroll_button(state.current_session_id.as_deref(), selected.as_deref())
        };
        let button = if self.is_in_flight() {
            button.disabled()
        } else {
            button
        };
        self.view.set_enroll_button(&button);
        button
    }

    pub async fn on_session_selected(&self) -> EnrollButton {
        self.refresh_enroll_button().await
    }

    pub async fn open_panel(&self) {
        if !self.open.swap(true, Ordering::AcqRel) {
            self.view.set_panel_open(true);
            self.view.focus_session_select();
        }
        self.refresh_enroll_button().await;
    }

    pub async fn close_panel(&self) {
        self.collapse();
        self.refresh_enroll_button().await;
    }

    pub async fn toggle_panel(&self) {
        if self.is_open() {
            self.close_panel().await;
        } else {
            self.open_panel().await;
        }
    }

    /// Enrolls the learner into the selected session. A confirmation arriving while another
    /// request is outstanding is dropped without touching the network.
    pub async fn confirm_enrollment(&self) -> Result<String, PanelError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("enrollment confirmation ignored, a request is in flight");
            return Err(PanelError::RequestInFlight);
        }

        let result = self.submit().await;
        self.in_flight.store(false, Ordering::Release);
        self.refresh_enroll_button().await;
        result
    }

    async fn submit(&self) -> Result<String, PanelError> {
        let command = EnrollInSession {
            request_id: Uuid::now_v7(),
            selected_session_id: self.selector.selected_session_id(),
        };
        let decision = {
            let state = self.state.read().await;
            decide_enroll(&state, command)
        };
        let request = match decision {
            Decision::Accepted { request } => request,
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "enrollment rejected before submission");
                self.view.notify_error(&reason.to_string());
                return Err(PanelError::Rejected(reason));
            }
        };

        self.refresh_enroll_button().await;
        self.view.set_date_display(&DateDisplay::Pending);

        match self.handler.handle(&request).await {
            Ok(event) => {
                let state = {
                    let mut state = self.state.write().await;
                    *state = evolve(state.clone(), event);
                    state.clone()
                };
                tracing::info!(
                    request_id = %request.request_id,
                    entitlement_id = %state.entitlement_id,
                    session_id = %request.session_id,
                    "enrolled in session"
                );

                let dates = state
                    .current_session()
                    .map(|session| session.display_date_range.clone())
                    .unwrap_or_default();
                self.view.render(&state);
                self.view.reveal_open_trigger();
                self.view.set_date_display(&DateDisplay::Confirmed(dates));
                self.view
                    .reveal_enter_course(&self.enter_course_url(&request.session_id));
                self.collapse();
                Ok(request.session_id)
            }
            Err(error) => {
                tracing::error!(
                    request_id = %request.request_id,
                    session_id = %request.session_id,
                    %error,
                    "enrollment request failed"
                );
                let dates = self
                    .state
                    .read()
                    .await
                    .current_session()
                    .map(|session| session.display_date_range.clone())
                    .unwrap_or_default();
                self.view.notify_error(ENROLLMENT_FAILED_NOTICE);
                self.view.set_date_display(&DateDisplay::Dates(dates));
                Err(PanelError::Enrollment(error))
            }
        }
    }

    fn collapse(&self) {
        if self.open.swap(false, Ordering::AcqRel) {
            self.view.set_panel_open(false);
        }
    }

    fn enter_course_url(&self, session_id: &str) -> String {
        self.course_home_url.replace("{session_id}", session_id)
    }
}
