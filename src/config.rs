//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so values are baked in with
//! `option_env!` when the crate is compiled. Parsing goes through a lookup
//! function so defaults and validation are testable without touching the
//! real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_AUTH_BASE_URL: &str = "";
pub const DEFAULT_HOME_ROUTE: &str = "/";
pub const DEFAULT_SIGN_UP_ROUTE: &str = "/sign-up";

const AUTH_BASE_URL_KEY: &str = "MEET_AUTH_BASE_URL";
const HOME_ROUTE_KEY: &str = "MEET_HOME_ROUTE";
const SIGN_UP_ROUTE_KEY: &str = "MEET_SIGN_UP_ROUTE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the auth server; empty means same origin as the page.
    pub auth_base_url: String,
    /// Route the user lands on after a successful sign-in.
    pub home_route: String,
    /// Route linked from the "Sign Up" call to action.
    pub sign_up_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_owned(),
            home_route: DEFAULT_HOME_ROUTE.to_owned(),
            sign_up_route: DEFAULT_SIGN_UP_ROUTE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional:
    /// - `MEET_AUTH_BASE_URL`: same origin when absent
    /// - `MEET_HOME_ROUTE`: default `/`
    /// - `MEET_SIGN_UP_ROUTE`: default `/sign-up`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_base_url = parse_base_url(lookup(AUTH_BASE_URL_KEY).as_deref())?;
        let home_route = parse_route(HOME_ROUTE_KEY, lookup(HOME_ROUTE_KEY).as_deref(), DEFAULT_HOME_ROUTE)?;
        let sign_up_route =
            parse_route(SIGN_UP_ROUTE_KEY, lookup(SIGN_UP_ROUTE_KEY).as_deref(), DEFAULT_SIGN_UP_ROUTE)?;
        Ok(Self { auth_base_url, home_route, sign_up_route })
    }

    /// Config baked in at compile time. Falls back to defaults (with a
    /// warning) if any baked value is malformed.
    #[must_use]
    pub fn from_build_env() -> Self {
        let baked = |key: &str| {
            let value = match key {
                AUTH_BASE_URL_KEY => option_env!("MEET_AUTH_BASE_URL"),
                HOME_ROUTE_KEY => option_env!("MEET_HOME_ROUTE"),
                SIGN_UP_ROUTE_KEY => option_env!("MEET_SIGN_UP_ROUTE"),
                _ => None,
            };
            value.map(str::to_owned)
        };
        Self::from_lookup(baked).unwrap_or_else(|e| {
            log::warn!("client config invalid, using defaults: {e}");
            Self::default()
        })
    }

    /// Absolute or origin-relative URL of the email sign-in endpoint.
    #[must_use]
    pub fn sign_in_endpoint(&self) -> String {
        format!("{}/api/auth/sign-in/email", self.auth_base_url)
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).unwrap_or(DEFAULT_AUTH_BASE_URL);
    if value.is_empty() {
        return Ok(String::new());
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_route(key: &'static str, raw: Option<&str>, default: &str) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidRoute { key, value: value.to_owned() });
    }
    Ok(value.to_owned())
}
