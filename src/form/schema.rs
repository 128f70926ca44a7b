//! Field rules for the sign-in form.
//!
//! DESIGN
//! ======
//! Rules are declared on `Credentials` with `validator` derives. Failures are
//! folded into a typed `FieldErrors` record with one slot per input, so the
//! view never looks errors up by field-name string.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 1 characters long";

// Dotted domain with an alphabetic TLD of 2+ letters; the local part may not
// start with '.' or contain "..", which is checked outside the regex.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Email/password pair submitted for authentication.
#[derive(Clone, Default, PartialEq, Eq, Validate)]
pub struct Credentials {
    #[validate(custom(function = "validate_email_syntax"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must be at least 1 characters long"))]
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-field validation messages; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, failures) in errors.field_errors() {
            let message = failures.first().map(|failure| {
                failure
                    .message
                    .as_ref()
                    .map_or_else(|| failure.code.to_string(), ToString::to_string)
            });
            match &*field {
                "email" => out.email = message,
                "password" => out.password = message,
                _ => {}
            }
        }
        out
    }
}

fn validate_email_syntax(email: &str) -> Result<(), ValidationError> {
    if !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email) {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message(Cow::Borrowed(INVALID_EMAIL_MESSAGE)))
}

/// Check a candidate against the field rules.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate(candidate: &Credentials) -> Result<(), FieldErrors> {
    candidate.validate().map_err(|e| FieldErrors::from(&e))
}
