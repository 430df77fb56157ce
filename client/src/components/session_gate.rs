//! `SessionGate`: the single wrapper every protected page renders through.
//!
//! ARCHITECTURE
//! ============
//! On mount the gate activates the shared `SessionGuard`, mirrors the
//! activation's state into a signal and starts resolution in the background.
//! The protected content is a closure over the resolved principal, so it
//! cannot be rendered without one.
//!
//! The server render and the first browser render both show the loading
//! placeholder; protected content only ever appears after hydration.

#[cfg(all(test, feature = "ssr"))]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use session::{Activation, GuardState, Principal};

use super::spinner::Spinner;

/// Activation of the enclosing gate, provided to descendants such as
/// `SignOutButton`.
#[derive(Clone, Debug)]
pub struct SessionHandle(Activation);

impl SessionHandle {
    #[must_use]
    pub fn activation(&self) -> &Activation {
        &self.0
    }
}

/// Renders `children` with the principal once the session resolves, a
/// placeholder before that and nothing while redirecting to login.
#[component]
pub fn SessionGate<F, IV>(children: F) -> impl IntoView
where
    F: Fn(Principal) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let state = RwSignal::new(GuardState::Initializing);

    #[cfg(feature = "hydrate")]
    activate(state);

    move || match state.get() {
        GuardState::Initializing => view! { <Spinner label="Checking your session..." /> }.into_any(),
        GuardState::Resolved(principal) => children(principal).into_any(),
        GuardState::Redirecting => view! { <div class="session-gate session-gate--redirecting"></div> }.into_any(),
    }
}

#[cfg(feature = "hydrate")]
fn activate(state: RwSignal<GuardState>) {
    use crate::state::auth::AuthServices;

    let services = expect_context::<AuthServices>();

    let activation = services.guard().activate(move |next| {
        let _ = state.try_set(next.clone());
    });
    provide_context(SessionHandle(activation.clone()));

    let on_unmount = activation.clone();
    on_cleanup(move || on_unmount.deactivate());

    leptos::task::spawn_local(async move {
        let settled = activation.resolve().await;
        log::debug!("session gate settled: authenticated={}", settled.is_authenticated());
    });
}
