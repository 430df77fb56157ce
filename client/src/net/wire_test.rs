use super::*;

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("https://auth.example/", USER_PATH), "https://auth.example/auth/v1/user");
    assert_eq!(endpoint("https://auth.example", "auth/v1/user"), "https://auth.example/auth/v1/user");
    assert_eq!(endpoint("  ", USER_PATH), USER_PATH);
}

#[test]
fn with_redirect_encodes_target() {
    let url = with_redirect("https://a/auth/v1/recover", Some("https://board.example/update-password"));
    assert_eq!(
        url,
        "https://a/auth/v1/recover?redirect_to=https%3A%2F%2Fboard.example%2Fupdate-password"
    );
}

#[test]
fn with_redirect_appends_to_existing_query() {
    let url = with_redirect("https://a/x?y=1", Some("/back"));
    assert_eq!(url, "https://a/x?y=1&redirect_to=%2Fback");
}

#[test]
fn with_redirect_skips_blank_target() {
    assert_eq!(with_redirect("https://a/x", None), "https://a/x");
    assert_eq!(with_redirect("https://a/x", Some("  ")), "https://a/x");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn user_record_maps_to_principal() {
    let record: UserRecord = serde_json::from_str(
        r#"{"id":"u-1","email":"ada@example.com","last_sign_in_at":"2024-05-01T10:00:00Z","role":"authenticated"}"#,
    )
    .unwrap();
    let principal = record.into_principal();
    assert_eq!(principal.id, "u-1");
    assert_eq!(principal.email, "ada@example.com");
    assert_eq!(principal.last_sign_in_label().as_deref(), Some("2024-05-01T10:00:00Z"));
}

#[test]
fn user_record_tolerates_missing_optional_fields() {
    let record: UserRecord = serde_json::from_str(r#"{"id":"u-2"}"#).unwrap();
    let principal = record.into_principal();
    assert_eq!(principal.email, "");
    assert_eq!(principal.last_sign_in_at, None);
}

#[test]
fn token_grant_prefers_provider_expiry() {
    let grant: TokenGrant = serde_json::from_str(
        r#"{"access_token":"a","refresh_token":"r","expires_in":3600,"expires_at":5000,"user":{"id":"u"}}"#,
    )
    .unwrap();
    assert_eq!(grant.expires_at(100), 5000);

    let relative = TokenGrant { expires_at: None, ..grant };
    assert_eq!(relative.expires_at(100), 3700);
}

#[test]
fn signup_body_distinguishes_session_from_pending_user() {
    let session: SignUpBody = serde_json::from_str(
        r#"{"access_token":"a","refresh_token":"r","expires_in":60,"user":{"id":"u"}}"#,
    )
    .unwrap();
    assert!(matches!(session, SignUpBody::Session(_)));

    let pending: SignUpBody = serde_json::from_str(r#"{"id":"u","email":"new@example.com"}"#).unwrap();
    assert!(matches!(pending, SignUpBody::Pending(ref user) if user.id == "u"));
}

#[test]
fn parse_body_reports_malformed_json_as_unavailable() {
    let err = parse_body::<UserRecord>("not json").unwrap_err();
    assert!(matches!(err, AuthError::ProviderUnavailable(_)));
}

#[test]
fn error_message_prefers_description_fields_in_order() {
    let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    assert_eq!(error_message(400, body), "Invalid login credentials");
    assert_eq!(error_message(422, r#"{"msg":"Password should be at least 6 characters"}"#), "Password should be at least 6 characters");
    assert_eq!(error_message(400, r#"{"message":"  "," error":"x","error":"bad"}"#), "bad");
}

#[test]
fn error_message_falls_back_to_plain_text_or_status() {
    assert_eq!(error_message(502, "Bad Gateway"), "Bad Gateway");
    assert_eq!(error_message(500, ""), "Request failed (500).");
    assert_eq!(error_message(500, "{}"), "Request failed (500).");
}

#[test]
fn error_message_truncates_long_bodies() {
    let long = "x".repeat(500);
    assert_eq!(error_message(500, &long).chars().count(), 200);
}

#[test]
fn classify_failure_splits_refusals_from_outages() {
    assert!(matches!(
        classify_failure(400, r#"{"error_description":"Invalid login credentials"}"#),
        AuthError::Rejected { status: 400, ref message } if message == "Invalid login credentials"
    ));
    assert!(matches!(classify_failure(422, "{}"), AuthError::Rejected { status: 422, .. }));
    assert!(matches!(classify_failure(429, "{}"), AuthError::ProviderUnavailable(_)));
    assert!(matches!(classify_failure(503, "down"), AuthError::ProviderUnavailable(_)));
}

#[test]
fn user_response_treats_unauthorized_as_no_principal() {
    assert_eq!(interpret_user_response(401, "{}"), Ok(None));
    assert_eq!(interpret_user_response(403, "{}"), Ok(None));
}

#[test]
fn user_response_parses_principal() {
    let principal = interpret_user_response(200, r#"{"id":"u-9","email":"x@example.com"}"#)
        .unwrap()
        .unwrap();
    assert_eq!(principal, Principal::new("u-9", "x@example.com"));
}

#[test]
fn user_response_fails_closed_on_unexpected_status() {
    assert!(matches!(interpret_user_response(500, ""), Err(AuthError::ProviderUnavailable(_))));
    assert!(matches!(interpret_user_response(400, "{}"), Err(AuthError::ProviderUnavailable(_))));
    assert!(matches!(interpret_user_response(200, "[]"), Err(AuthError::ProviderUnavailable(_))));
}

#[test]
fn logout_response_accepts_unknown_tokens() {
    assert_eq!(interpret_logout_response(204, ""), Ok(()));
    assert_eq!(interpret_logout_response(401, ""), Ok(()));
    assert!(matches!(interpret_logout_response(500, "boom"), Err(AuthError::SignOutFailure(ref m)) if m == "boom"));
}
