//! Account creation page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(any(test, feature = "hydrate"))]
use session::SignUpOutcome;
use session::{Credentials, MIN_PASSWORD_LEN};

use crate::components::auth_card::{AuthCard, FormAlert, FormMessage};
use crate::state::auth::AuthServices;

#[cfg(any(test, feature = "hydrate"))]
const CONFIRM_EMAIL_MESSAGE: &str = "Check your inbox and follow the link to confirm your email address.";

fn validate_signup_input(email: &str, password: &str) -> Result<Credentials, String> {
    Credentials::for_sign_up(email, password).map_err(|e| e.user_message())
}

/// Where a successful signup leads: straight to the feed, or a message when
/// the provider wants the address confirmed first.
#[cfg(any(test, feature = "hydrate"))]
fn signup_next_step(outcome: &SignUpOutcome, landing: &str) -> Result<String, FormMessage> {
    match outcome {
        SignUpOutcome::SignedIn(_) => Ok(landing.to_owned()),
        SignUpOutcome::ConfirmationRequired => Err(FormMessage::success(CONFIRM_EMAIL_MESSAGE)),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
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
        let credentials = match validate_signup_input(&email.get(), &password.get()) {
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
                match provider.sign_up(&credentials).await {
                    Ok(outcome) => match signup_next_step(&outcome, &landing) {
                        Ok(path) => crate::util::browser::go_to(&path),
                        Err(notice) => {
                            message.set(notice);
                            busy.set(false);
                        }
                    },
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
        <AuthCard title="Sign up">
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
                        autocomplete="new-password"
                        minlength=MIN_PASSWORD_LEN.to_string()
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <p class="auth-form__hint">{format!("At least {MIN_PASSWORD_LEN} characters.")}</p>
                <FormAlert message=message />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-card__links">
                "Already have an account? "
                <a href="/login">"Log in"</a>
            </p>
        </AuthCard>
    }
}
