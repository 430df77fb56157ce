use super::*;

fn sample() -> AppConfig {
    AppConfig {
        auth_url: "https://auth.default".to_owned(),
        anon_key: "anon-default".to_owned(),
        site_url: "https://board.example".to_owned(),
        timeout_secs: 10,
    }
}

#[test]
fn normalize_runtime_value_trims_and_rejects_empty() {
    assert_eq!(normalize_runtime_value(""), None);
    assert_eq!(normalize_runtime_value("   "), None);
    assert_eq!(normalize_runtime_value("  https://auth.example "), Some("https://auth.example".to_owned()));
}

#[test]
fn apply_runtime_overrides_ignores_missing_values() {
    let mut config = sample();
    apply_runtime_overrides(
        &mut config,
        RuntimeConfig {
            auth_url: normalize_runtime_value(" "),
            anon_key: None,
            site_url: normalize_runtime_value(""),
            timeout_secs: None,
        },
    );
    assert_eq!(config, sample());
}

#[test]
fn apply_runtime_overrides_overwrites_when_present() {
    let mut config = sample();
    apply_runtime_overrides(
        &mut config,
        RuntimeConfig {
            auth_url: normalize_runtime_value("https://auth.override"),
            anon_key: normalize_runtime_value("anon-override"),
            site_url: normalize_runtime_value("https://other.example"),
            timeout_secs: Some(3),
        },
    );
    assert_eq!(config.auth_url, "https://auth.override");
    assert_eq!(config.anon_key, "anon-override");
    assert_eq!(config.site_url, "https://other.example");
    assert_eq!(config.timeout_secs, 3);
}

#[test]
fn is_configured_requires_url_and_key() {
    assert!(sample().is_configured());
    assert!(!AppConfig { anon_key: " ".to_owned(), ..sample() }.is_configured());
    assert!(!AppConfig::default().is_configured());
}

#[test]
fn reset_redirect_joins_site_and_path() {
    assert_eq!(sample().reset_redirect().as_deref(), Some("https://board.example/update-password"));
    let trailing = AppConfig { site_url: "https://board.example/".to_owned(), ..sample() };
    assert_eq!(trailing.reset_redirect().as_deref(), Some("https://board.example/update-password"));
    assert_eq!(AppConfig::default().reset_redirect(), None);
}

#[test]
fn confirm_redirect_points_at_feed() {
    assert_eq!(sample().confirm_redirect().as_deref(), Some("https://board.example/app"));
    assert_eq!(AppConfig::default().confirm_redirect(), None);
}

#[test]
fn timeout_is_never_zero() {
    let config = AppConfig { timeout_secs: 0, ..sample() };
    assert_eq!(config.timeout(), Duration::from_secs(1));
}

#[test]
fn to_script_assigns_global_and_escapes_script_close() {
    let config = AppConfig { site_url: "https://x.example/</script>".to_owned(), ..sample() };
    let script = config.to_script();
    assert!(script.starts_with("window.BOARD_CONFIG = {"));
    assert!(!script.contains("</script>"));
    assert!(script.contains("anon-default"));
}

#[test]
fn deserialize_fills_defaults() {
    let config: AppConfig = serde_json::from_str(r#"{"auth_url":"https://a","anon_key":"k"}"#).unwrap();
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(config.site_url.is_empty());
}
