use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = ClientConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.home_route, "/");
    assert_eq!(cfg.sign_up_route, "/sign-up");
    assert!(cfg.auth_base_url.is_empty());
}

#[test]
fn sign_in_endpoint_is_same_origin_by_default() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.sign_in_endpoint(), "/api/auth/sign-in/email");
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("MEET_AUTH_BASE_URL", "https://auth.example.test/"),
        ("MEET_HOME_ROUTE", "/meetings"),
        ("MEET_SIGN_UP_ROUTE", " /register "),
    ]))
    .unwrap();
    assert_eq!(cfg.auth_base_url, "https://auth.example.test");
    assert_eq!(cfg.home_route, "/meetings");
    assert_eq!(cfg.sign_up_route, "/register");
    assert_eq!(cfg.sign_in_endpoint(), "https://auth.example.test/api/auth/sign-in/email");
}

#[test]
fn blank_route_falls_back_to_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("MEET_HOME_ROUTE", "   ")])).unwrap();
    assert_eq!(cfg.home_route, DEFAULT_HOME_ROUTE);
}

// =============================================================
// Rejections
// =============================================================

#[test]
fn base_url_without_scheme_errors() {
    let err = ClientConfig::from_lookup(lookup_from(&[("MEET_AUTH_BASE_URL", "auth.example.test")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("auth.example.test".to_owned()));
}

#[test]
fn relative_route_errors() {
    let err = ClientConfig::from_lookup(lookup_from(&[("MEET_SIGN_UP_ROUTE", "sign-up")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidRoute { key: "MEET_SIGN_UP_ROUTE", value: "sign-up".to_owned() });
}
