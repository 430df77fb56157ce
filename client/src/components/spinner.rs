//! Loading placeholder.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(into, default = "Loading...".to_owned())] label: String) -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-live="polite">
            <div class="spinner__wheel" aria-hidden="true"></div>
            <p class="spinner__label">{label}</p>
        </div>
    }
}
