//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{AppState, Focus, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let state = AppState {
            title: config.title().to_string(),
            mask_password: config.mask_password(),
            ..Default::default()
        };

        Self {
            state,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request the event loop to stop
    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        let shortcut = key.modifiers.contains(SHORTCUT_MODIFIER);

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('r') if shortcut => self.reset(),
            KeyCode::Char('p') if shortcut => self.state.toggle_password_mask(),
            KeyCode::Char('u') if shortcut => self.state.form_clear_field(),
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(),
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') if self.state.focus.field().is_none() => self.activate(),
            KeyCode::Char(c) if !shortcut => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Enter on the focused widget: fields submit the form, buttons press
    fn activate(&mut self) {
        match self.state.focus {
            Focus::Email | Focus::Password => self.submit(),
            Focus::LoginButton => {
                if self.state.form.is_valid() {
                    self.submit();
                } else {
                    tracing::debug!("Login button is disabled");
                }
            }
            Focus::ResetButton => self.reset(),
        }
    }

    fn submit(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Accepted(credentials) => {
                tracing::debug!(email = %credentials.email, "Login form submitted");
                self.status_message = Some(format!("Submitted as {}", credentials.email));
            }
            SubmitOutcome::Blocked => {
                tracing::debug!("Login form submitted while invalid");
            }
        }
    }

    fn reset(&mut self) {
        tracing::debug!("Login form reset");
        self.state.form.reset();
    }
}
