//! Form domain layer
//!
//! Type-safe field state, validation rules and the login form built on them.

mod field;
mod login_form;
mod validation;

pub use field::FormField;
pub use login_form::{FieldName, LoginForm, SubmitOutcome};
