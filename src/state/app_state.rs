//! Application state definitions

use super::forms::{FieldName, LoginForm};

/// Title shown when the config doesn't provide one
pub const DEFAULT_TITLE: &str = "login-tui";

/// Widget that currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    LoginButton,
    ResetButton,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::LoginButton,
            Self::LoginButton => Self::ResetButton,
            Self::ResetButton => Self::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Email => Self::ResetButton,
            Self::Password => Self::Email,
            Self::LoginButton => Self::Password,
            Self::ResetButton => Self::LoginButton,
        }
    }

    /// The text field behind this focus target, if it is one
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Email => Some(FieldName::Email),
            Self::Password => Some(FieldName::Password),
            Self::LoginButton | Self::ResetButton => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static title of the root shell
    pub title: String,
    /// The hosted login form
    pub form: LoginForm,
    /// Focused widget
    pub focus: Focus,
    /// Whether the password is drawn as bullets
    pub mask_password: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            form: LoginForm::new(),
            focus: Focus::default(),
            mask_password: true,
        }
    }
}

impl AppState {
    /// Move focus to the next widget, blurring the current one
    pub fn focus_next(&mut self) {
        self.blur();
        self.focus = self.focus.next();
    }

    /// Move focus to the previous widget, blurring the current one
    pub fn focus_prev(&mut self) {
        self.blur();
        self.focus = self.focus.prev();
    }

    /// Leaving a text field marks it touched
    fn blur(&mut self) {
        if let Some(name) = self.focus.field() {
            self.form.touch(name);
        }
    }

    /// Type a character into the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(name) = self.focus.field() {
            self.form.edit(name, |value| value.push(c));
        }
    }

    /// Delete the last character of the focused field
    pub fn form_backspace(&mut self) {
        if let Some(name) = self.focus.field() {
            self.form.edit(name, |value| {
                value.pop();
            });
        }
    }

    /// Clear the focused field
    pub fn form_clear_field(&mut self) {
        if let Some(name) = self.focus.field() {
            self.form.edit(name, String::clear);
        }
    }

    pub fn toggle_password_mask(&mut self) {
        self.mask_password = !self.mask_password;
    }
}
