//! Application core logic
//!
//! Owns the registration state and maps key events onto the field-change,
//! submit, and reset operations. All handling is synchronous; one event
//! completes before the next is read.

use crate::config::TuiConfig;
use crate::state::{AppState, FieldId};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Cosmetic TUI settings
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        tracing::debug!(?config, "loaded config");
        Ok(Self {
            state: AppState::new(),
            config,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True when focus is on the course select or the level radio row
    fn on_option_field(&self) -> bool {
        matches!(self.state.form.active_field(), Some(f) if !f.is_text())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons_row = self.state.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            // Submit shortcut (works from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.submit_form();
            }
            // Buttons row: 0 = Validate Form, 1 = Clear
            KeyCode::Left | KeyCode::Char('h') if on_buttons_row => self.state.form.prev_button(),
            KeyCode::Right | KeyCode::Char('l') if on_buttons_row => self.state.form.next_button(),
            KeyCode::Enter if on_buttons_row => match self.state.form.selected_button {
                0 => self.state.submit_form(),
                _ => self.state.reset_form(),
            },
            // Course select / level radio cycle with arrows or Space
            KeyCode::Left if self.on_option_field() => self.state.form_cycle_prev(),
            KeyCode::Right if self.on_option_field() => self.state.form_cycle_next(),
            KeyCode::Char(' ') if self.on_option_field() => self.state.form_cycle_next(),
            // Text field input
            KeyCode::Char(c) => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Enter => {
                // Enter adds a newline only in the multiline message field
                if let Some(field) = self.state.form.active_field() {
                    if field.is_multiline() {
                        self.state.form_input_char('\n');
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}
