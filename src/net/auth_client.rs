//! Authentication client used by the sign-in flow.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: `HttpAuthClient` answers
//! `AuthError::Unavailable`, since signing in only makes sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an `AuthError`; transport problems are not
//! swallowed, so the form always leaves `Pending` once the request settles.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use std::future::Future;

use crate::config::ClientConfig;
use crate::error::AuthError;
use crate::form::schema::Credentials;

/// Email/password sign-in against an external auth service.
pub trait AuthClient {
    /// Resolve to `Ok(())` once the service has accepted the credentials and
    /// established a session.
    fn sign_in_email(&self, credentials: &Credentials) -> impl Future<Output = Result<(), AuthError>>;
}

#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    endpoint: String,
}

impl HttpAuthClient {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { endpoint: config.sign_in_endpoint() }
    }
}

impl AuthClient for HttpAuthClient {
    async fn sign_in_email(&self, credentials: &Credentials) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::{SignInEmailRequest, parse_error_body};

            let payload = SignInEmailRequest::from(credentials);
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .credentials(web_sys::RequestCredentials::Include)
                .json(&payload)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            let status = resp.status();
            let status_text = resp.status_text();
            let body = resp
                .text()
                .await
                .map(|raw| parse_error_body(&raw))
                .unwrap_or_default();
            Err(AuthError::rejected(status, body.message, &status_text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }
}
