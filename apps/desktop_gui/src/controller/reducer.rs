//! View state owned by the UI thread and how worker events change it.

use shared::domain::{StudentDraft, StudentRecord};

use crate::controller::events::UiEvent;

#[derive(Debug, Default)]
pub struct ViewState {
    pub students: Vec<StudentRecord>,
    pub form: StudentDraft,
    pub search_query: String,
    pub search_result: Option<StudentRecord>,
    pub error_message: Option<String>,
    pub status: String,
    pub in_flight: usize,
}

impl ViewState {
    pub fn command_queued(&mut self) {
        self.in_flight += 1;
        self.status = "Working...".to_string();
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::StateChanged {
                state,
                origin,
                write_landed,
            } => {
                self.students = state.students;
                self.search_result = state.search.result;
                self.error_message = state.error_message;
                // Only a landed write clears the draft. Text typed while a rejected
                // submit was in flight is kept.
                if origin.submits_form() && write_landed {
                    self.form.clear();
                }
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.in_flight == 0 {
                    self.status.clear();
                }
            }
            UiEvent::BackendUnavailable(message) => {
                self.error_message = Some(message);
                self.in_flight = 0;
                self.status.clear();
            }
        }
    }
}
