//! Sign-in form state: field values, field errors, submission lifecycle.
//!
//! DESIGN
//! ======
//! Plain data so the page can hold it in a single `RwSignal` and tests can
//! drive every transition without a reactive runtime.
//!
//! ```text
//! Idle ──submit(valid)──▶ Pending ──Ok──▶ Succeeded (terminal)
//!   ▲                        │
//!   └── Failed(msg) ◀──Err───┘
//! ```

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::schema::{self, Credentials, FieldErrors};
use crate::error::AuthError;

/// Lifecycle of a sign-in attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    /// Last attempt failed; the form is interactive again.
    Failed(String),
}

/// Result of asking the form to submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; hand these credentials to the auth client.
    Dispatched(Credentials),
    /// Validation failed; field errors are populated.
    Rejected,
    /// A submission is in flight or has already succeeded.
    Blocked,
}

#[derive(Clone, Debug, Default)]
pub struct SignInForm {
    values: Credentials,
    field_errors: FieldErrors,
    state: SubmissionState,
}

impl SignInForm {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.values.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.values.password
    }

    /// Store the email input. Validation waits for the next submit.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.values.email = value.into();
    }

    /// Store the password input. Validation waits for the next submit.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.values.password = value.into();
    }

    #[must_use]
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn accepts_submit(&self) -> bool {
        matches!(self.state, SubmissionState::Idle | SubmissionState::Failed(_))
    }

    /// Message for the global error banner, if any.
    #[must_use]
    pub fn global_error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Validate the current values and, if they pass, enter `Pending`.
    ///
    /// A rejected submit keeps any banner from the previous attempt; only a
    /// dispatched one clears it.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.accepts_submit() {
            return SubmitOutcome::Blocked;
        }
        match schema::validate(&self.values) {
            Err(errors) => {
                log::debug!("sign-in submit rejected by validation: {errors:?}");
                self.field_errors = errors;
                SubmitOutcome::Rejected
            }
            Ok(()) => {
                self.field_errors = FieldErrors::default();
                self.state = SubmissionState::Pending;
                SubmitOutcome::Dispatched(self.values.clone())
            }
        }
    }

    /// Apply the auth client's answer. Ignored unless a submission is pending.
    pub fn resolve(&mut self, result: Result<(), AuthError>) {
        if !self.is_pending() {
            log::debug!("ignoring sign-in result outside pending state");
            return;
        }
        self.state = match result {
            Ok(()) => SubmissionState::Succeeded,
            Err(e) => SubmissionState::Failed(e.to_string()),
        };
    }
}
