use session::principal::parse_timestamp;

use super::*;

#[test]
fn last_sign_in_text_uses_rfc3339_or_never() {
    let principal = Principal::new("u1", "a@example.com");
    assert_eq!(last_sign_in_text(&principal), "Never");

    let at = parse_timestamp(Some("2024-05-01T10:00:00Z")).unwrap();
    let principal = principal.with_last_sign_in(at);
    assert_eq!(last_sign_in_text(&principal), "2024-05-01T10:00:00Z");
}

#[test]
fn tab_class_marks_active_tab() {
    assert_eq!(tab_class(FeedTab::Nearby, FeedTab::Nearby), "feed-tabs__tab feed-tabs__tab--active");
    assert_eq!(tab_class(FeedTab::Nearby, FeedTab::Latest), "feed-tabs__tab");
}

#[test]
fn empty_feed_text_mentions_filters_when_active() {
    let mut state = FeedState::default();
    assert_eq!(empty_feed_text(&state), "No posts yet.");
    state.set_radius(20);
    assert_eq!(empty_feed_text(&state), "No posts match these filters.");
}
