//! Field validation rules and their error kinds

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Longest accepted email address
const EMAIL_MAX_LEN: usize = 254;
/// Longest accepted local part (before the `@`)
const EMAIL_LOCAL_MAX_LEN: usize = 64;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Why a field value was rejected.
///
/// The message reads as a predicate on the field label, e.g.
/// `"Email" + " " + "is required"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("is required")]
    RequiredMissing,
    #[error("must be a valid email address")]
    InvalidFormat,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
}

/// A single validation rule attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty
    Required,
    /// Value must be a well-formed email address (empty values pass)
    Email,
    /// Value must have at least this many characters (empty values pass)
    MinLength(usize),
}

impl Rule {
    /// Check a value against this rule
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required => {
                if value.is_empty() {
                    return Err(ValidationError::RequiredMissing);
                }
            }
            Rule::Email => {
                if !value.is_empty() && !is_email(value) {
                    return Err(ValidationError::InvalidFormat);
                }
            }
            Rule::MinLength(min) => {
                if !value.is_empty() && value.encode_utf16().count() < *min {
                    return Err(ValidationError::TooShort { min: *min });
                }
            }
        }
        Ok(())
    }
}

/// Run every rule in order and collect the failures.
///
/// The first entry of the result is the one shown to the user.
pub fn validate(rules: &[Rule], value: &str) -> Vec<ValidationError> {
    rules
        .iter()
        .filter_map(|rule| rule.check(value).err())
        .collect()
}

/// Whether `value` is a syntactically valid email address
pub fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_MAX_LEN => EMAIL_PATTERN.is_match(value),
        _ => false,
    }
}
