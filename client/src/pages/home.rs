//! Public landing page.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    ("Create boards in seconds", "Set up a board to share what your neighbourhood needs to know."),
    ("Always up to date", "Posts appear as soon as they are published."),
    ("Works on any device", "A responsive layout for phones, tablets and desktops."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <h1 class="home-page__title">"Community Board"</h1>
            <div class="home-page__actions">
                <a class="button button--primary" href="/signup">"Sign up"</a>
                <a class="button button--secondary" href="/login">"Log in"</a>
            </div>
            <div class="home-page__features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <section class="feature-card">
                                <h2>{*title}</h2>
                                <p>{*body}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </main>
    }
}
