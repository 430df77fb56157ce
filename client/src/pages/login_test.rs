use super::*;

#[test]
fn validate_login_input_normalizes_email() {
    let credentials = validate_login_input("  Ada@Example.COM ", "secret").unwrap();
    assert_eq!(credentials.email(), "ada@example.com");
    assert_eq!(credentials.password(), "secret");
}

#[test]
fn validate_login_input_reports_form_messages() {
    assert_eq!(
        validate_login_input("not-an-email", "secret").unwrap_err(),
        "Enter a valid email address."
    );
    assert_eq!(validate_login_input("a@b.com", "   ").unwrap_err(), "Enter your password.");
}

#[test]
fn validate_login_input_does_not_apply_signup_policy() {
    assert!(validate_login_input("a@b.com", "short").is_ok());
}
