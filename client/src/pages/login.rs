//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use session::Credentials;

use crate::components::auth_card::{AuthCard, FormAlert, FormMessage};
use crate::state::auth::AuthServices;

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, String> {
    Credentials::for_sign_in(email, password).map_err(|e| e.user_message())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<AuthServices>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(FormMessage::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
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
            leptos::task::spawn_local(async move {
                match provider.sign_in(&credentials).await {
                    Ok(principal) => {
                        log::info!("signed in as {}", principal.id);
                        crate::util::browser::go_to(&landing);
                    }
                    Err(e) => {
                        message.set(FormMessage::error(e.user_message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&services, credentials);
        }
    };

    view! {
        <AuthCard title="Log in">
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__field">
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__field">
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <FormAlert message=message />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
            <p class="auth-card__links">
                <a href="/reset-password">"Forgot your password?"</a>
                " · "
                <a href="/signup">"Create an account"</a>
            </p>
        </AuthCard>
    }
}
