use super::*;

fn config(site_url: &str) -> AppConfig {
    AppConfig { site_url: site_url.to_owned(), ..AppConfig::default() }
}

#[test]
fn validate_reset_email_normalizes() {
    assert_eq!(validate_reset_email(" Ada@Example.com "), Ok("ada@example.com".to_owned()));
    assert_eq!(validate_reset_email("nope"), Err("Enter a valid email address."));
}

#[test]
fn reset_redirect_prefers_configured_site() {
    assert_eq!(
        reset_redirect(&config("https://board.example"), Some("http://localhost:3000")).as_deref(),
        Some("https://board.example/update-password")
    );
}

#[test]
fn reset_redirect_falls_back_to_page_origin() {
    assert_eq!(
        reset_redirect(&config(""), Some("http://localhost:3000/")).as_deref(),
        Some("http://localhost:3000/update-password")
    );
    assert_eq!(reset_redirect(&config(""), Some("null")), None);
    assert_eq!(reset_redirect(&config(""), None), None);
}
