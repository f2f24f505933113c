// Test doubles for the UI-facing ports: a view that records every write and a selector whose
// value the test controls.

use std::sync::Mutex;

use crate::modules::course_entitlements::core::enroll_button::EnrollButton;
use crate::modules::course_entitlements::core::ports::{DateDisplay, PanelView, SessionSelector};
use crate::modules::course_entitlements::core::state::EntitlementState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Render { current_session_id: Option<String> },
    EnrollButton(EnrollButton),
    PanelOpen(bool),
    FocusSessionSelect,
    DateDisplay(DateDisplay),
    EnterCourse(String),
    OpenTrigger,
    Error(String),
}

#[derive(Default)]
pub struct RecordingPanelView {
    calls: Mutex<Vec<ViewCall>>,
}

#[allow(dead_code)]
impl RecordingPanelView {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: ViewCall) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count(&self, matches: impl Fn(&ViewCall) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    pub fn last_button(&self) -> Option<EnrollButton> {
        self.calls().into_iter().rev().find_map(|call| match call {
            ViewCall::EnrollButton(button) => Some(button),
            _ => None,
        })
    }

    pub fn last_date_display(&self) -> Option<DateDisplay> {
        self.calls().into_iter().rev().find_map(|call| match call {
            ViewCall::DateDisplay(display) => Some(display),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl PanelView for RecordingPanelView {
    fn render(&self, state: &EntitlementState) {
        self.record(ViewCall::Render {
            current_session_id: state.current_session_id.clone(),
        });
    }

    fn set_enroll_button(&self, button: &EnrollButton) {
        self.record(ViewCall::EnrollButton(*button));
    }

    fn set_panel_open(&self, open: bool) {
        self.record(ViewCall::PanelOpen(open));
    }

    fn focus_session_select(&self) {
        self.record(ViewCall::FocusSessionSelect);
    }

    fn set_date_display(&self, display: &DateDisplay) {
        self.record(ViewCall::DateDisplay(display.clone()));
    }

    fn reveal_enter_course(&self, href: &str) {
        self.record(ViewCall::EnterCourse(href.to_string()));
    }

    fn reveal_open_trigger(&self) {
        self.record(ViewCall::OpenTrigger);
    }

    fn notify_error(&self, message: &str) {
        self.record(ViewCall::Error(message.to_string()));
    }
}

#[derive(Default)]
pub struct FixedSessionSelector {
    selected: Mutex<Option<String>>,
}

impl FixedSessionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, session_id: Option<&str>) {
        *self.selected.lock().unwrap() = session_id.map(str::to_string);
    }
}

impl SessionSelector for FixedSessionSelector {
    fn selected_session_id(&self) -> Option<String> {
        self.selected.lock().unwrap().clone()
    }
}
