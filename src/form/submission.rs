//! Bridges validated credentials to the auth client and routes the result.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs inside a task spawned by the sign-in page. The page passes its
//! `Lifetime` so a response that lands after the page unmounted is dropped
//! instead of writing into disposed signals or navigating away from whatever
//! the user is looking at now.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use super::schema::Credentials;
use crate::error::AuthError;
use crate::net::auth_client::AuthClient;
use crate::util::lifetime::Lifetime;

/// Client-side route changes.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

/// How a submission ended from the page's point of view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed(AuthError),
    /// The page was torn down before the response arrived.
    Discarded,
}

pub struct SubmissionHandler<C, N> {
    client: C,
    navigator: N,
    home_route: String,
}

impl<C, N> SubmissionHandler<C, N>
where
    C: AuthClient,
    N: Navigator,
{
    pub fn new(client: C, navigator: N, home_route: impl Into<String>) -> Self {
        Self { client, navigator, home_route: home_route.into() }
    }

    /// Sign in and hand the result to `apply` (normally
    /// `SignInForm::resolve`). On success, navigate home afterwards.
    pub async fn handle<F>(&self, credentials: Credentials, lifetime: &Lifetime, apply: F) -> Completion
    where
        F: FnOnce(Result<(), AuthError>),
    {
        log::info!("signing in {}", credentials.email);
        let result = self.client.sign_in_email(&credentials).await;

        if !lifetime.is_alive() {
            log::debug!("sign-in settled after the form unmounted; discarding");
            return Completion::Discarded;
        }

        match result {
            Ok(()) => {
                apply(Ok(()));
                self.navigator.navigate_to(&self.home_route);
                Completion::Succeeded
            }
            Err(e) => {
                log::warn!("sign-in failed: {e}");
                apply(Err(e.clone()));
                Completion::Failed(e)
            }
        }
    }
}
