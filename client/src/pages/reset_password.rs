//! Password reset request page.
//!
//! The provider emails a recovery link that lands on `/update-password` with
//! a short-lived session in the URL fragment.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use session::normalize_email;

use crate::components::auth_card::{AuthCard, FormAlert, FormMessage};
#[cfg(any(test, feature = "hydrate"))]
use crate::config::{AppConfig, UPDATE_PASSWORD_PATH};
use crate::state::auth::AuthServices;

#[cfg(any(test, feature = "hydrate"))]
const RESET_SENT_MESSAGE: &str = "If an account exists for that address, a reset link is on its way.";

fn validate_reset_email(email: &str) -> Result<String, &'static str> {
    normalize_email(email).ok_or("Enter a valid email address.")
}

/// Link target for the recovery email: the configured site URL, falling back
/// to the origin the page was served from.
#[cfg(any(test, feature = "hydrate"))]
fn reset_redirect(config: &AppConfig, page_origin: Option<&str>) -> Option<String> {
    config.reset_redirect().or_else(|| {
        let origin = page_origin?.trim().trim_end_matches('/');
        if origin.is_empty() || origin == "null" {
            return None;
        }
        Some(format!("{origin}{UPDATE_PASSWORD_PATH}"))
    })
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let services = expect_context::<AuthServices>();
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(FormMessage::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let address = match validate_reset_email(&email.get()) {
            Ok(address) => address,
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
            let origin = web_sys::window().and_then(|w| w.location().origin().ok());
            let redirect_to = reset_redirect(&services.config, origin.as_deref());
            leptos::task::spawn_local(async move {
                match provider.request_password_reset(&address, redirect_to.as_deref()).await {
                    Ok(()) => message.set(FormMessage::success(RESET_SENT_MESSAGE)),
                    Err(e) => message.set(FormMessage::error(e.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&services, address);
        }
    };

    view! {
        <AuthCard title="Reset your password">
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
                <FormAlert message=message />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send reset link" }}
                </button>
            </form>
            <p class="auth-card__links">
                <a href="/login">"Back to log in"</a>
            </p>
        </AuthCard>
    }
}
