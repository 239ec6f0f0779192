//! Registration form state and focus handling

use super::field::{
    next_radio_option, next_select_option, prev_radio_option, prev_select_option, FieldId,
};

/// Index of the buttons row in the tab cycle (after the five fields)
pub const BUTTONS_ROW_INDEX: usize = 5;

/// Number of tab stops: five fields plus the buttons row
pub const TAB_STOP_COUNT: usize = 6;

/// Buttons on the buttons row (0 = Validate, 1 = Clear)
pub const BUTTON_COUNT: usize = 2;

/// The single source-of-truth record behind both the form and the preview.
///
/// All five values are strings; `course` and `level` hold identifiers from
/// their fixed option sets. Focus bookkeeping (`active_field_index`,
/// `selected_button`) is TUI navigation state, not form data, and is left
/// untouched by `clear_values`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub course: String,
    pub level: String,
    pub message: String,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Course => &self.course,
            FieldId::Level => &self.level,
            FieldId::Message => &self.message,
        }
    }

    /// Replace a field's value
    pub fn set_value(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Course => self.course = value,
            FieldId::Level => self.level = value,
            FieldId::Message => self.message = value,
        }
    }

    /// The focused field, or None when the buttons row is active
    pub fn active_field(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW_INDEX
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % TAB_STOP_COUNT;
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = TAB_STOP_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Append a character to the focused text field.
    /// Returns true if the form changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match self.active_field() {
            Some(FieldId::Name) => {
                self.name.push(c);
                true
            }
            Some(FieldId::Email) => {
                self.email.push(c);
                true
            }
            Some(FieldId::Message) => {
                self.message.push(c);
                true
            }
            _ => false,
        }
    }

    /// Remove the last character from the focused text field.
    /// Returns true if the form changed.
    pub fn pop_char(&mut self) -> bool {
        match self.active_field() {
            Some(FieldId::Name) => self.name.pop().is_some(),
            Some(FieldId::Email) => self.email.pop().is_some(),
            Some(FieldId::Message) => self.message.pop().is_some(),
            _ => false,
        }
    }

    /// Cycle the focused select/radio field forward.
    /// Returns true if the form changed.
    pub fn cycle_option_next(&mut self) -> bool {
        match self.active_field() {
            Some(FieldId::Course) => {
                let next = next_select_option(&self.course, FieldId::Course.options());
                let changed = self.course != next;
                self.course = next.to_string();
                changed
            }
            Some(FieldId::Level) => {
                let next = next_radio_option(&self.level, FieldId::Level.options());
                let changed = self.level != next;
                self.level = next.to_string();
                changed
            }
            _ => false,
        }
    }

    /// Cycle the focused select/radio field backward.
    /// Returns true if the form changed.
    pub fn cycle_option_prev(&mut self) -> bool {
        match self.active_field() {
            Some(FieldId::Course) => {
                let prev = prev_select_option(&self.course, FieldId::Course.options());
                let changed = self.course != prev;
                self.course = prev.to_string();
                changed
            }
            Some(FieldId::Level) => {
                let prev = prev_radio_option(&self.level, FieldId::Level.options());
                let changed = self.level != prev;
                self.level = prev.to_string();
                changed
            }
            _ => false,
        }
    }

    /// Restore all five values to the empty default. Focus is unchanged.
    pub fn clear_values(&mut self) {
        for field in FieldId::ALL {
            self.set_value(field, String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_str(form: &mut RegistrationForm, s: &str) {
        for c in s.chars() {
            form.push_char(c);
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_name() {
            let form = RegistrationForm::new();
            assert_eq!(form.active_field(), Some(FieldId::Name));
            assert!(!form.is_buttons_row_active());
        }

        #[test]
        fn test_next_field_cycles_through_all_stops() {
            let mut form = RegistrationForm::new();
            for _ in 0..TAB_STOP_COUNT {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // wrapped back
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut form = RegistrationForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert_eq!(form.active_field(), None);
        }

        #[test]
        fn test_buttons_row_follows_message() {
            let mut form = RegistrationForm::new();
            form.active_field_index = 4;
            assert_eq!(form.active_field(), Some(FieldId::Message));
            form.next_field();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_next_button_wraps() {
            let mut form = RegistrationForm::new();
            assert_eq!(form.selected_button, 0);
            form.next_button();
            assert_eq!(form.selected_button, 1);
            form.next_button();
            assert_eq!(form.selected_button, 0);
        }

        #[test]
        fn test_prev_button_wraps() {
            let mut form = RegistrationForm::new();
            form.prev_button();
            assert_eq!(form.selected_button, 1);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_char_targets_focused_field() {
            let mut form = RegistrationForm::new();
            type_str(&mut form, "Alice");
            assert_eq!(form.name, "Alice");
            assert_eq!(form.email, "");
        }

        #[test]
        fn test_push_char_ignored_on_select_fields() {
            let mut form = RegistrationForm::new();
            form.active_field_index = 2; // course
            assert!(!form.push_char('x'));
            assert_eq!(form.course, "");
        }

        #[test]
        fn test_push_char_ignored_on_buttons_row() {
            let mut form = RegistrationForm::new();
            form.active_field_index = BUTTONS_ROW_INDEX;
            assert!(!form.push_char('x'));
        }

        #[test]
        fn test_pop_char_reports_change() {
            let mut form = RegistrationForm::new();
            assert!(!form.pop_char()); // already empty
            form.push_char('a');
            assert!(form.pop_char());
            assert_eq!(form.name, "");
        }

        #[test]
        fn test_multiline_message_accepts_newline() {
            let mut form = RegistrationForm::new();
            form.active_field_index = 4;
            type_str(&mut form, "line one");
            form.push_char('\n');
            type_str(&mut form, "line two");
            assert_eq!(form.message, "line one\nline two");
        }
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_course_cycles_through_empty() {
            let mut form = RegistrationForm::new();
            form.active_field_index = 2;
            assert!(form.cycle_option_next());
            assert_eq!(form.course, "react");
            assert!(form.cycle_option_next());
            assert_eq!(form.course, "fullstack");
            assert!(form.cycle_option_next());
            assert_eq!(form.course, "uiux");
            assert!(form.cycle_option_next());
            assert_eq!(form.course, "");
        }

        #[test]
        fn test_level_wraps_without_empty() {
            let mut form = RegistrationForm::new();
            form.active_field_index = 3;
            assert!(form.cycle_option_next());
            assert_eq!(form.level, "beginner");
            form.cycle_option_next();
            form.cycle_option_next();
            assert_eq!(form.level, "advanced");
            assert!(form.cycle_option_next());
            assert_eq!(form.level, "beginner");
        }

        #[test]
        fn test_cycle_prev_from_empty_select() {
            let mut form = RegistrationForm::new();
            form.active_field_index = 2;
            assert!(form.cycle_option_prev());
            assert_eq!(form.course, "uiux");
        }

        #[test]
        fn test_cycle_on_text_field_is_noop() {
            let mut form = RegistrationForm::new();
            assert!(!form.cycle_option_next());
            assert!(!form.cycle_option_prev());
            assert_eq!(form.name, "");
        }
    }

    mod values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_value_and_set_value_round_trip() {
            let mut form = RegistrationForm::new();
            for field in FieldId::ALL {
                form.set_value(field, format!("v-{}", field.name()));
            }
            for field in FieldId::ALL {
                assert_eq!(form.value(field), format!("v-{}", field.name()));
            }
        }

        #[test]
        fn test_clear_values_resets_fields_but_not_focus() {
            let mut form = RegistrationForm::new();
            form.set_value(FieldId::Name, "Alice".into());
            form.set_value(FieldId::Course, "react".into());
            form.active_field_index = BUTTONS_ROW_INDEX;
            form.selected_button = 1;

            form.clear_values();

            for field in FieldId::ALL {
                assert_eq!(form.value(field), "");
            }
            assert_eq!(form.active_field_index, BUTTONS_ROW_INDEX);
            assert_eq!(form.selected_button, 1);
        }
    }
}
