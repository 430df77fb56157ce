//! Choose a new password after following a recovery link.
//!
//! The recovery link signs the visitor in, so this page is protected like
//! the feed: without a session it redirects to login.

#[cfg(test)]
#[path = "update_password_test.rs"]
mod update_password_test;

use leptos::prelude::*;
use session::{MIN_PASSWORD_LEN, Principal};

use crate::components::auth_card::{AuthCard, FormAlert, FormMessage};
use crate::components::session_gate::SessionGate;
use crate::state::auth::AuthServices;

fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Use at least 8 characters for your password.");
    }
    if password != confirm {
        return Err("The passwords do not match.");
    }
    Ok(password.to_owned())
}

#[component]
pub fn UpdatePasswordPage() -> impl IntoView {
    view! {
        <SessionGate let:principal>
            <UpdatePasswordForm principal=principal />
        </SessionGate>
    }
}

#[component]
fn UpdatePasswordForm(principal: Principal) -> impl IntoView {
    let services = expect_context::<AuthServices>();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(FormMessage::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let new_password = match validate_new_password(&password.get(), &confirm.get()) {
            Ok(new_password) => new_password,
            Err(e) => {
                message.set(FormMessage::error(e));
                return;
            }
        };
        busy.set(true);
        message.set(FormMessage::default());

        #[cfg(feature = "hydrate")]
        {
            let provider = std::sync::Arc::clone(&services.provider);
            let landing = services.destinations.landing.clone();
            let login = services.destinations.login.clone();
            leptos::task::spawn_local(async move {
                match provider.update_password(&new_password).await {
                    Ok(()) => crate::util::browser::go_to(&landing),
                    Err(e) if e.is_unauthenticated() => crate::util::browser::go_to(&login),
                    Err(e) => {
                        message.set(FormMessage::error(e.user_message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&services, new_password);
        }
    };

    view! {
        <AuthCard title="Choose a new password">
            <p class="auth-card__subtitle">{format!("Signed in as {}", principal.email)}</p>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__field">
                    "New password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__field">
                    "Confirm password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        required
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <FormAlert message=message />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save password" }}
                </button>
            </form>
        </AuthCard>
    }
}
