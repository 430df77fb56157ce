//! Card frame shared by the login, signup and password pages.

use leptos::prelude::*;

/// Tone of a form message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Error,
    Success,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Error => "auth-message auth-message--error",
            Self::Success => "auth-message auth-message--success",
        }
    }
}

/// Feedback line under a form. Renders nothing while the text is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormMessage {
    pub tone: Tone,
    pub text: String,
}

impl FormMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Error, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }
}

#[component]
pub fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">{title}</h1>
                {children()}
            </div>
        </main>
    }
}

#[component]
pub fn FormAlert(message: RwSignal<FormMessage>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().text.is_empty()>
            <p class=move || message.get().tone.class() role="alert">
                {move || message.get().text}
            </p>
        </Show>
    }
}
