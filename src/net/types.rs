//! Wire DTOs for the email sign-in endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::form::schema::Credentials;

/// Body of `POST /api/auth/sign-in/email`.
#[derive(Debug, Serialize)]
pub struct SignInEmailRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for SignInEmailRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self { email: &credentials.email, password: &credentials.password }
    }
}

/// Error payload returned by the auth server on a non-2xx response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Decode an error body, tolerating empty or non-JSON responses.
#[must_use]
pub fn parse_error_body(raw: &str) -> AuthErrorBody {
    serde_json::from_str(raw).unwrap_or_default()
}
