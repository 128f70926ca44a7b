//! Typed errors surfaced by the sign-in flow.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is what the user sees in the global error banner, so
//! `AuthError::Rejected` renders the server-supplied message verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure reported by the authentication collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered but refused the sign-in.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request could not be sent or its response could not be read.
    #[error("Network error: {0}")]
    Transport(String),
    /// Sign-in was attempted outside the browser.
    #[error("sign in is not available on the server")]
    Unavailable,
}

impl AuthError {
    /// Build a rejection from an HTTP status and the optional message fields
    /// the auth server may send back.
    #[must_use]
    pub fn rejected(status: u16, message: Option<String>, status_text: &str) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| Some(status_text.trim().to_owned()).filter(|t| !t.is_empty()))
            .unwrap_or_else(|| format!("sign in failed: {status}"));
        Self::Rejected { status, message }
    }
}

/// Invalid client configuration value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid auth base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("invalid route for {key}: '{value}' (must start with '/')")]
    InvalidRoute { key: &'static str, value: String },
}
