//! Wire schema and response interpretation for the hosted auth REST API.
//!
//! DESIGN
//! ======
//! Everything here is pure so it compiles and tests natively; `identity`
//! performs the actual requests in the browser and delegates every decision
//! about URLs, bodies and status codes to this module.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};
use session::principal::parse_timestamp;
use session::{AuthError, Principal};

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

// =============================================================================
// ENDPOINTS
// =============================================================================

pub const PASSWORD_GRANT_PATH: &str = "/auth/v1/token?grant_type=password";
pub const REFRESH_GRANT_PATH: &str = "/auth/v1/token?grant_type=refresh_token";
pub const SIGNUP_PATH: &str = "/auth/v1/signup";
pub const USER_PATH: &str = "/auth/v1/user";
pub const LOGOUT_PATH: &str = "/auth/v1/logout";
pub const RECOVER_PATH: &str = "/auth/v1/recover";
pub const HEALTH_PATH: &str = "/auth/v1/health";

/// Join a base URL and a path with exactly one slash between them.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Append an encoded `redirect_to` query parameter when one is given.
#[must_use]
pub fn with_redirect(url: &str, redirect_to: Option<&str>) -> String {
    match redirect_to.map(str::trim).filter(|r| !r.is_empty()) {
        Some(target) => {
            let sep = if url.contains('?') { '&' } else { '?' };
            format!("{url}{sep}redirect_to={}", urlencoding::encode(target))
        }
        None => url.to_owned(),
    }
}

#[must_use]
pub fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct PasswordBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RefreshBody<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RecoverBody<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewPasswordBody<'a> {
    pub password: &'a str,
}

// =============================================================================
// RESPONSE BODIES
// =============================================================================

/// User object as returned by `/user`, `/signup` and inside token grants.
#[derive(Clone, Debug, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub last_sign_in_at: Option<String>,
}

impl UserRecord {
    #[must_use]
    pub fn into_principal(self) -> Principal {
        Principal {
            last_sign_in_at: parse_timestamp(self.last_sign_in_at.as_deref()),
            id: self.id,
            email: self.email.unwrap_or_default(),
        }
    }
}

/// Successful password or refresh grant.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: UserRecord,
}

impl TokenGrant {
    /// Absolute expiry in unix seconds, preferring the provider's own value.
    #[must_use]
    pub fn expires_at(&self, now_unix: i64) -> i64 {
        self.expires_at
            .unwrap_or_else(|| now_unix.saturating_add(self.expires_in))
    }
}

/// `/signup` answers with a session when accounts are auto-confirmed and with
/// a bare user when a confirmation email was sent.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SignUpBody {
    Session(TokenGrant),
    Pending(UserRecord),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Decode a JSON body, reporting malformed payloads as provider failures.
///
/// # Errors
///
/// Returns [`AuthError::ProviderUnavailable`] when `text` does not match `T`.
pub fn parse_body<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T, AuthError> {
    serde_json::from_str(text).map_err(|e| AuthError::ProviderUnavailable(format!("unexpected response: {e}")))
}

/// Human-readable message from an error response body.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = [parsed.error_description, parsed.msg, parsed.message, parsed.error]
        .into_iter()
        .flatten()
        .map(|m| m.trim().to_owned())
        .find(|m| !m.is_empty())
        .unwrap_or_else(|| fallback_message(status, body));
    truncate(&message)
}

fn fallback_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        format!("Request failed ({status}).")
    } else {
        trimmed.to_owned()
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/// Map a non-success status to the error taxonomy.
///
/// Server-side failures and throttling make the provider unavailable; other
/// client errors are refusals whose message the visitor should see.
#[must_use]
pub fn classify_failure(status: u16, body: &str) -> AuthError {
    let message = error_message(status, body);
    match status {
        408 | 429 | 500..=599 => AuthError::ProviderUnavailable(message),
        400..=499 => AuthError::Rejected { status, message },
        _ => AuthError::ProviderUnavailable(message),
    }
}

/// Interpret the `/user` response used to resolve the current principal.
///
/// # Errors
///
/// Returns [`AuthError::ProviderUnavailable`] for server failures and
/// malformed bodies.
pub fn interpret_user_response(status: u16, body: &str) -> Result<Option<Principal>, AuthError> {
    match status {
        200 => parse_body::<UserRecord>(body).map(|user| Some(user.into_principal())),
        401 | 403 | 404 => Ok(None),
        _ => match classify_failure(status, body) {
            AuthError::Rejected { message, .. } => Err(AuthError::ProviderUnavailable(message)),
            other => Err(other),
        },
    }
}

/// Interpret the `/logout` response. A token the provider no longer knows is
/// already signed out.
///
/// # Errors
///
/// Returns [`AuthError::SignOutFailure`] for any other non-success status.
pub fn interpret_logout_response(status: u16, body: &str) -> Result<(), AuthError> {
    match status {
        200..=299 | 401 | 403 | 404 => Ok(()),
        _ => Err(AuthError::SignOutFailure(error_message(status, body))),
    }
}
