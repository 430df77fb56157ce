//! Authenticated feed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered through `SessionGate`, so the account panel always has a
//! resolved principal. Tabs and filters only drive local `FeedState`; the
//! post list is always empty.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;
use session::Principal;

use crate::components::session_gate::SessionGate;
use crate::components::sign_out_button::SignOutButton;
use crate::state::feed::{FeedState, FeedTab, MAX_RADIUS_KM, MIN_RADIUS_KM, parse_radius};

fn last_sign_in_text(principal: &Principal) -> String {
    principal.last_sign_in_label().unwrap_or_else(|| "Never".to_owned())
}

fn tab_class(active: FeedTab, tab: FeedTab) -> &'static str {
    if active == tab { "feed-tabs__tab feed-tabs__tab--active" } else { "feed-tabs__tab" }
}

fn empty_feed_text(state: &FeedState) -> &'static str {
    if state.filters.is_active() {
        "No posts match these filters."
    } else {
        "No posts yet."
    }
}

#[component]
pub fn FeedPage() -> impl IntoView {
    view! {
        <SessionGate let:principal>
            <FeedView principal=principal />
        </SessionGate>
    }
}

#[component]
fn FeedView(principal: Principal) -> impl IntoView {
    let feed = RwSignal::new(FeedState::default());
    let tag_input = RwSignal::new(String::new());
    let last_sign_in = last_sign_in_text(&principal);

    let on_add_tag = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = tag_input.get();
        feed.update(|state| {
            state.add_tag(&raw);
        });
        tag_input.set(String::new());
    };

    view! {
        <main class="feed-page">
            <section class="account-panel">
                <h1>"Your account"</h1>
                <ul class="account-panel__details">
                    <li><span class="account-panel__label">"Email: "</span>{principal.email.clone()}</li>
                    <li><span class="account-panel__label">"Last sign-in: "</span>{last_sign_in}</li>
                    <li><span class="account-panel__label">"User ID: "</span>{principal.id.clone()}</li>
                </ul>
                <SignOutButton />
            </section>

            <nav class="feed-tabs">
                {FeedTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                class=move || tab_class(feed.get().tab, tab)
                                on:click=move |_| feed.update(|state| state.select_tab(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    type="button"
                    class="feed-tabs__filters"
                    on:click=move |_| feed.update(FeedState::toggle_filters)
                >
                    "Filters"
                </button>
            </nav>

            <Show when=move || feed.get().filters_open>
                <section class="feed-filters">
                    <label class="feed-filters__field">
                        {move || format!("Radius: {} km", feed.get().filters.radius_km)}
                        <input
                            type="range"
                            min=MIN_RADIUS_KM.to_string()
                            max=MAX_RADIUS_KM.to_string()
                            prop:value=move || feed.get().filters.radius_km.to_string()
                            on:input=move |ev| {
                                if let Some(radius) = parse_radius(&event_target_value(&ev)) {
                                    feed.update(|state| state.set_radius(radius));
                                }
                            }
                        />
                    </label>
                    <form class="feed-filters__tags" on:submit=on_add_tag>
                        <input
                            type="text"
                            placeholder="Add a tag"
                            prop:value=move || tag_input.get()
                            on:input=move |ev| tag_input.set(event_target_value(&ev))
                        />
                    </form>
                    <ul class="feed-filters__tag-list">
                        {move || {
                            feed.get()
                                .filters
                                .tags
                                .into_iter()
                                .map(|tag| {
                                    let removed = tag.clone();
                                    view! {
                                        <li class="tag-chip">
                                            {format!("#{tag}")}
                                            <button
                                                type="button"
                                                aria-label="Remove tag"
                                                on:click=move |_| feed.update(|state| state.remove_tag(&removed))
                                            >
                                                "×"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <label class="feed-filters__field">
                        "Keywords"
                        <input
                            type="search"
                            prop:value=move || feed.get().filters.keywords
                            on:change=move |ev| feed.update(|state| state.set_keywords(&event_target_value(&ev)))
                        />
                    </label>
                    <button type="button" class="button" on:click=move |_| feed.update(FeedState::reset_filters)>
                        "Clear filters"
                    </button>
                </section>
            </Show>

            <section class="feed-list">
                <p class="feed-list__empty">{move || empty_feed_text(&feed.get())}</p>
            </section>
        </main>
    }
}
