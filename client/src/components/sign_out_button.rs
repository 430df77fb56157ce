//! Sign-out control for protected pages.

use leptos::prelude::*;

use super::session_gate::SessionHandle;

/// Ends the session of the enclosing `SessionGate` and goes to login.
#[component]
pub fn SignOutButton() -> impl IntoView {
    let handle = use_context::<SessionHandle>();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        let Some(handle) = handle.clone() else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);
        sign_out(handle);
    };

    view! {
        <button class="sign-out-button" type="button" on:click=on_click disabled=move || busy.get()>
            {move || if busy.get() { "Signing out..." } else { "Sign out" }}
        </button>
    }
}

#[cfg(feature = "hydrate")]
fn sign_out(handle: SessionHandle) {
    leptos::task::spawn_local(async move {
        handle.activation().end_session().await;
    });
}

#[cfg(not(feature = "hydrate"))]
fn sign_out(_handle: SessionHandle) {}
