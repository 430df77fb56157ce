//! `IdentityProvider` backed by a hosted GoTrue-compatible auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, tokens kept in
//! `localStorage` by `token_store`.
//! Server-side (SSR): every call fails with `ProviderUnavailable`; the SSR
//! render never resolves a session, so protected content is browser-only.
//!
//! DESIGN
//! ======
//! The access token is refreshed before it is used when it is about to
//! expire. A token the provider refuses is discarded so the next resolution
//! starts from a clean slate.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::time::Duration;

use async_trait::async_trait;
use session::{AuthError, Credentials, IdentityProvider, Principal, SignUpOutcome};

use crate::config::AppConfig;

#[cfg(feature = "hydrate")]
use super::http::{self, Call, Reply, Verb};
#[cfg(feature = "hydrate")]
use super::token_store::{self, StoredSession};
use super::wire;
#[cfg(feature = "hydrate")]
use super::wire::{NewPasswordBody, PasswordBody, RecoverBody, RefreshBody, SignUpBody, TokenGrant};

#[cfg(not(feature = "hydrate"))]
const SERVER_SIDE: &str = "identity provider is only reachable from the browser";

/// Hosted identity service reached over its public REST API.
#[derive(Clone, Debug)]
pub struct HostedIdentity {
    base_url: String,
    anon_key: String,
    timeout: Duration,
    /// Where sign-up confirmation emails send the visitor back to.
    confirm_redirect: Option<String>,
}

impl HostedIdentity {
    #[must_use]
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            timeout: Duration::from_secs(10),
            confirm_redirect: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.auth_url.trim(), config.anon_key.trim())
            .with_timeout(config.timeout())
            .with_confirm_redirect(config.confirm_redirect())
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_confirm_redirect(mut self, redirect_to: Option<String>) -> Self {
        self.confirm_redirect = redirect_to;
        self
    }

    /// Sign-up path carrying the confirmation link target, when known.
    #[must_use]
    pub fn signup_path(&self) -> String {
        wire::with_redirect(wire::SIGNUP_PATH, self.confirm_redirect.as_deref())
    }

    /// Fail fast when the deployment never told us where the provider is.
    fn ensure_configured(&self) -> Result<(), AuthError> {
        if self.base_url.trim().is_empty() || self.anon_key.trim().is_empty() {
            return Err(AuthError::ProviderUnavailable("identity provider is not configured".to_owned()));
        }
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
impl HostedIdentity {
    async fn call(&self, verb: Verb, path: &str, access_token: Option<&str>, json: Option<String>) -> Result<Reply, AuthError> {
        let url = wire::endpoint(&self.base_url, path);
        http::send(Call { verb, url: &url, anon_key: &self.anon_key, access_token, json, timeout: self.timeout }).await
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, access_token: Option<&str>, body: &B) -> Result<Reply, AuthError> {
        let json = serde_json::to_string(body)
            .map_err(|err| AuthError::ProviderUnavailable(format!("failed to encode request: {err}")))?;
        self.call(Verb::Post, path, access_token, Some(json)).await
    }

    fn store_grant(grant: &TokenGrant) {
        token_store::save(&StoredSession::from_grant(grant, token_store::now_unix()));
    }

    /// Stored session with a usable access token, refreshing it first when
    /// it is about to expire.
    async fn active_session(&self) -> Result<Option<StoredSession>, AuthError> {
        let Some(stored) = token_store::load() else {
            return Ok(None);
        };
        if !stored.needs_refresh(token_store::now_unix()) {
            return Ok(Some(stored));
        }

        log::debug!("access token near expiry, refreshing");
        let reply = self
            .post_json(wire::REFRESH_GRANT_PATH, None, &RefreshBody { refresh_token: &stored.refresh_token })
            .await?;
        if reply.ok() {
            let grant: TokenGrant = wire::parse_body(&reply.body)?;
            let refreshed = StoredSession::from_grant(&grant, token_store::now_unix());
            token_store::save(&refreshed);
            return Ok(Some(refreshed));
        }

        match wire::classify_failure(reply.status, &reply.body) {
            AuthError::Rejected { message, .. } => {
                log::info!("refresh token refused: {message}");
                token_store::clear();
                Ok(None)
            }
            other => Err(other),
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for HostedIdentity {
    async fn current_principal(&self) -> Result<Option<Principal>, AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let Some(stored) = self.active_session().await? else {
                return Ok(None);
            };
            let reply = self.call(Verb::Get, wire::USER_PATH, Some(&stored.access_token), None).await?;
            let principal = wire::interpret_user_response(reply.status, &reply.body)?;
            if principal.is_none() {
                token_store::clear();
            }
            Ok(principal)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::ProviderUnavailable(SERVER_SIDE.to_owned()))
        }
    }

    async fn end_session(&self) -> Result<(), AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let Some(stored) = token_store::load() else {
                return Ok(());
            };
            token_store::clear();
            let reply = self.call(Verb::Post, wire::LOGOUT_PATH, Some(&stored.access_token), None).await?;
            wire::interpret_logout_response(reply.status, &reply.body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::SignOutFailure(SERVER_SIDE.to_owned()))
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let body = PasswordBody { email: credentials.email(), password: credentials.password() };
            let reply = self.post_json(wire::PASSWORD_GRANT_PATH, None, &body).await?;
            if !reply.ok() {
                return Err(wire::classify_failure(reply.status, &reply.body));
            }
            let grant: TokenGrant = wire::parse_body(&reply.body)?;
            Self::store_grant(&grant);
            Ok(grant.user.into_principal())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::ProviderUnavailable(SERVER_SIDE.to_owned()))
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let body = PasswordBody { email: credentials.email(), password: credentials.password() };
            let reply = self.post_json(&self.signup_path(), None, &body).await?;
            if !reply.ok() {
                return Err(wire::classify_failure(reply.status, &reply.body));
            }
            match wire::parse_body::<SignUpBody>(&reply.body)? {
                SignUpBody::Session(grant) => {
                    Self::store_grant(&grant);
                    Ok(SignUpOutcome::SignedIn(grant.user.into_principal()))
                }
                SignUpBody::Pending(_) => Ok(SignUpOutcome::ConfirmationRequired),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::ProviderUnavailable(SERVER_SIDE.to_owned()))
        }
    }

    async fn request_password_reset(&self, email: &str, redirect_to: Option<&str>) -> Result<(), AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let path = wire::with_redirect(wire::RECOVER_PATH, redirect_to);
            let reply = self.post_json(&path, None, &RecoverBody { email }).await?;
            if reply.ok() { Ok(()) } else { Err(wire::classify_failure(reply.status, &reply.body)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, redirect_to);
            Err(AuthError::ProviderUnavailable(SERVER_SIDE.to_owned()))
        }
    }

    async fn update_password(&self, new_password: &str) -> Result<(), AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let Some(stored) = self.active_session().await? else {
                return Err(AuthError::NoActiveSession);
            };
            let json = serde_json::to_string(&NewPasswordBody { password: new_password })
                .map_err(|err| AuthError::ProviderUnavailable(format!("failed to encode request: {err}")))?;
            let reply = self.call(Verb::Put, wire::USER_PATH, Some(&stored.access_token), Some(json)).await?;
            match reply.status {
                200..=299 => Ok(()),
                401 | 403 => {
                    token_store::clear();
                    Err(AuthError::NoActiveSession)
                }
                status => Err(wire::classify_failure(status, &reply.body)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_password;
            Err(AuthError::ProviderUnavailable(SERVER_SIDE.to_owned()))
        }
    }
}
