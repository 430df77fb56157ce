use session::Principal;

use super::*;

#[test]
fn validate_signup_input_enforces_password_length() {
    assert_eq!(
        validate_signup_input("a@b.com", "short").unwrap_err(),
        "Use at least 8 characters for your password."
    );
    assert!(validate_signup_input("a@b.com", "long enough").is_ok());
}

#[test]
fn validate_signup_input_rejects_malformed_email() {
    assert_eq!(validate_signup_input("a@", "long enough").unwrap_err(), "Enter a valid email address.");
}

#[test]
fn signed_in_outcome_goes_to_landing() {
    let outcome = SignUpOutcome::SignedIn(Principal::new("u1", "a@example.com"));
    assert_eq!(signup_next_step(&outcome, "/app"), Ok("/app".to_owned()));
}

#[test]
fn confirmation_outcome_shows_notice() {
    let notice = signup_next_step(&SignUpOutcome::ConfirmationRequired, "/app").unwrap_err();
    assert_eq!(notice, FormMessage::success(CONFIRM_EMAIL_MESSAGE));
}
