use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn sign_in_is_unavailable_outside_browser() {
    let client = HttpAuthClient::new(&ClientConfig::default());
    let result = futures::executor::block_on(client.sign_in_email(&Credentials::new("user@example.com", "secret")));
    assert_eq!(result, Err(AuthError::Unavailable));
}
