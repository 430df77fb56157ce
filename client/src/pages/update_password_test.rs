use super::*;

#[test]
fn validate_new_password_requires_minimum_length() {
    assert_eq!(
        validate_new_password("short", "short"),
        Err("Use at least 8 characters for your password.")
    );
}

#[test]
fn validate_new_password_requires_matching_confirmation() {
    assert_eq!(
        validate_new_password("long enough", "long enougH"),
        Err("The passwords do not match.")
    );
    assert_eq!(validate_new_password("long enough", "long enough"), Ok("long enough".to_owned()));
}

#[test]
fn validate_new_password_counts_characters_not_bytes() {
    assert!(validate_new_password("pässwörd", "pässwörd").is_ok());
    assert!(validate_new_password("äöüäöüä", "äöüäöüä").is_err());
}
