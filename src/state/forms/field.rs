//! Form field value objects

use super::validation::{validate, Rule, ValidationError};

/// Represents a single form field with its rules, value and interaction state
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    value: String,
    touched: bool,
    rules: Vec<Rule>,
    errors: Vec<ValidationError>,
}

impl FormField {
    /// Create a new empty, untouched text field validated by `rules`
    pub fn text(label: &str, rules: Vec<Rule>) -> Self {
        let errors = validate(&rules, "");
        Self {
            label: label.to_string(),
            value: String::new(),
            touched: false,
            rules,
            errors,
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
        self.revalidate();
    }

    /// Mark the field as having lost focus at least once
    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// Back to the pristine state: empty and untouched
    pub fn reset(&mut self) {
        self.touched = false;
        self.set_text(String::new());
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All failing rules, in rule order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The error to surface, if any. Computed regardless of touched state.
    pub fn error(&self) -> Option<ValidationError> {
        self.errors.first().copied()
    }

    /// User-facing error message, only once the field has been touched
    pub fn visible_error(&self) -> Option<String> {
        if !self.is_touched() {
            return None;
        }
        self.error().map(|e| format!("{} {}", self.label, e))
    }

    /// Get the display value for rendering
    pub fn display_value(&self, masked: bool) -> String {
        if masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.rules, &self.value);
    }
}
