use super::*;

// =============================================================
// Email rule
// =============================================================

#[test]
fn valid_pair_passes() {
    assert_eq!(validate(&Credentials::new("user@example.com", "secret")), Ok(()));
}

#[test]
fn common_email_shapes_pass() {
    for email in ["user@example.com", "first.last+tag@mail.example.co.uk", "o'brien@example.org", "a_b-c@sub-domain.io"] {
        assert_eq!(validate(&Credentials::new(email, "secret")), Ok(()), "email {email:?}");
    }
}

#[test]
fn malformed_emails_report_exact_message() {
    for email in [
        "",
        "not-an-email",
        "user@",
        "@example.com",
        "user example@example.com",
        ".user@example.com",
        "us..er@example.com",
        "user@example..com",
        "a@b",
        "user@localhost",
        "user@example.c",
        "us!er@example.com",
        "user@[127.0.0.1]",
        "user.@example.com",
    ] {
        let errors = validate(&Credentials::new(email, "secret")).unwrap_err();
        assert_eq!(errors.email.as_deref(), Some(INVALID_EMAIL_MESSAGE), "email {email:?}");
        assert_eq!(errors.password, None, "email {email:?}");
    }
}

// =============================================================
// Password rule
// =============================================================

#[test]
fn empty_password_reports_exact_message() {
    let errors = validate(&Credentials::new("user@example.com", "")).unwrap_err();
    assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT_MESSAGE));
    assert_eq!(errors.email, None);
}

#[test]
fn single_character_password_passes() {
    assert_eq!(validate(&Credentials::new("user@example.com", "x")), Ok(()));
}

#[test]
fn both_fields_fail_together() {
    let errors = validate(&Credentials::new("nope", "")).unwrap_err();
    assert_eq!(
        errors,
        FieldErrors {
            email: Some(INVALID_EMAIL_MESSAGE.to_owned()),
            password: Some(PASSWORD_TOO_SHORT_MESSAGE.to_owned()),
        }
    );
}

// =============================================================
// Purity
// =============================================================

#[test]
fn validating_twice_yields_identical_errors() {
    let candidate = Credentials::new("bad@", "");
    let first = validate(&candidate).unwrap_err();
    let second = validate(&candidate).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn field_errors_default_is_empty() {
    assert!(FieldErrors::default().is_empty());
    assert!(!FieldErrors { email: Some("x".to_owned()), password: None }.is_empty());
}

#[test]
fn debug_output_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("user@example.com", "hunter2"));
    assert!(rendered.contains("user@example.com"));
    assert!(!rendered.contains("hunter2"));
}
