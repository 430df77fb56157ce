//! Auth services shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AuthServices` from `AppConfig` and provides it. Pages use
//! the provider for sign-in forms; `SessionGate` turns it into a
//! `SessionGuard` for protected views.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use session::{Destinations, IdentityProvider, Navigator, SessionGuard, Timer};

use crate::config::AppConfig;
use crate::net::identity::HostedIdentity;

/// Identity provider plus the settings the guard needs.
#[derive(Clone)]
pub struct AuthServices {
    pub provider: Arc<dyn IdentityProvider>,
    pub config: AppConfig,
    pub destinations: Destinations,
}

impl AuthServices {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>, config: AppConfig) -> Self {
        Self { provider, config, destinations: Destinations::default() }
    }

    /// Services backed by the hosted provider described by `config`.
    #[must_use]
    pub fn hosted(config: AppConfig) -> Self {
        let provider: Arc<dyn IdentityProvider> = Arc::new(HostedIdentity::from_config(&config));
        Self::new(provider, config)
    }

    /// Guard wired to the given navigation and timing collaborators.
    #[must_use]
    pub fn guard_with(&self, navigator: Arc<dyn Navigator>, timer: Arc<dyn Timer>) -> SessionGuard {
        SessionGuard::new(Arc::clone(&self.provider), navigator, timer)
            .with_destinations(self.destinations.clone())
            .with_timeout(self.config.timeout())
    }

    /// Guard for the running browser page.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn guard(&self) -> SessionGuard {
        use crate::util::browser::{BrowserNavigator, BrowserTimer};
        self.guard_with(Arc::new(BrowserNavigator), Arc::new(BrowserTimer))
    }
}
