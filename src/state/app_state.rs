//! Application state definitions

use super::forms::{is_valid, validate, ErrorMap, RegistrationForm};

/// Aggregate warning shown after a failed submit attempt
pub const SUBMIT_WARNING: &str = "Please fix the highlighted fields before submitting.";

/// Success message shown after a valid submit. Submission is simulated;
/// no API is contacted.
pub const SUBMIT_SUCCESS: &str =
    "Form looks good! This data is ready to send to an API (but we are not calling any API here).";

/// Top-level application state: the registration form plus the transient
/// submit message. Every mutation goes through the methods here, so the
/// submit message can never survive a field edit.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Single source of truth for both the form and the preview
    pub form: RegistrationForm,
    /// Transient feedback after submit/reset; empty means "nothing to show"
    pub submit_message: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: RegistrationForm::new(),
            submit_message: String::new(),
        }
    }

    /// Error map derived from the current form values
    pub fn errors(&self) -> ErrorMap {
        validate(&self.form)
    }

    /// True iff the current form values pass every rule
    pub fn is_valid(&self) -> bool {
        is_valid(&self.form)
    }

    /// Type a character into the focused field
    pub fn form_input_char(&mut self, c: char) {
        if self.form.push_char(c) {
            self.submit_message.clear();
        }
    }

    /// Delete the last character of the focused field
    pub fn form_backspace(&mut self) {
        if self.form.pop_char() {
            self.submit_message.clear();
        }
    }

    /// Cycle the focused select/radio field forward
    pub fn form_cycle_next(&mut self) {
        if self.form.cycle_option_next() {
            self.submit_message.clear();
        }
    }

    /// Cycle the focused select/radio field backward
    pub fn form_cycle_prev(&mut self) {
        if self.form.cycle_option_prev() {
            self.submit_message.clear();
        }
    }

    /// Reset: all five fields back to empty, submit message cleared
    pub fn reset_form(&mut self) {
        self.form.clear_values();
        self.submit_message.clear();
    }

    /// Submit: validity is recomputed; an invalid form is left untouched
    /// and flagged, a valid one gets the success message. Nothing leaves
    /// the process either way.
    pub fn submit_form(&mut self) {
        let errors = self.errors();
        if errors.is_empty() {
            tracing::debug!("form accepted");
            self.submit_message = SUBMIT_SUCCESS.to_string();
        } else {
            let fields: Vec<&str> = errors.keys().map(|f| f.name()).collect();
            tracing::debug!(?fields, "form rejected");
            self.submit_message = SUBMIT_WARNING.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;
    use pretty_assertions::assert_eq;

    fn valid_state() -> AppState {
        AppState {
            form: RegistrationForm {
                name: "Alice Smith".into(),
                email: "a@b.com".into(),
                course: "react".into(),
                level: "beginner".into(),
                message: "I love coding a lot".into(),
                ..RegistrationForm::default()
            },
            submit_message: String::new(),
        }
    }

    #[test]
    fn test_submit_valid_form_sets_success_message() {
        let mut state = valid_state();
        state.submit_form();
        assert_eq!(state.submit_message, SUBMIT_SUCCESS);
    }

    #[test]
    fn test_submit_invalid_form_sets_warning_and_keeps_values() {
        let mut state = AppState::new();
        state.form.name = "Al".into();
        state.submit_form();
        assert_eq!(state.submit_message, SUBMIT_WARNING);
        assert_eq!(state.form.name, "Al"); // form not modified
    }

    #[test]
    fn test_any_edit_clears_submit_message() {
        let mut state = AppState::new();
        state.submit_form();
        assert_eq!(state.submit_message, SUBMIT_WARNING);

        state.form_input_char('x');
        assert_eq!(state.submit_message, "");
    }

    #[test]
    fn test_backspace_clears_submit_message() {
        let mut state = valid_state();
        state.submit_form();
        state.form.active_field_index = 0;
        state.form_backspace();
        assert_eq!(state.submit_message, "");
    }

    #[test]
    fn test_backspace_on_empty_field_keeps_message() {
        // No change to the form means the message stays up.
        let mut state = AppState::new();
        state.submit_form();
        state.form_backspace();
        assert_eq!(state.submit_message, SUBMIT_WARNING);
    }

    #[test]
    fn test_option_cycle_clears_submit_message() {
        let mut state = valid_state();
        state.submit_form();
        state.form.active_field_index = 2; // course
        state.form_cycle_next();
        assert_eq!(state.submit_message, "");
        assert_eq!(state.form.course, "fullstack");
    }

    #[test]
    fn test_reset_restores_default_and_clears_message() {
        let mut state = valid_state();
        state.submit_form();
        state.reset_form();
        for field in FieldId::ALL {
            assert_eq!(state.form.value(field), "");
        }
        assert_eq!(state.submit_message, "");
    }

    #[test]
    fn test_validity_tracks_error_map() {
        let mut state = AppState::new();
        assert!(!state.is_valid());
        assert_eq!(state.errors().len(), 5);

        state = valid_state();
        assert!(state.is_valid());
        assert!(state.errors().is_empty());
    }
}
