//! Thin `gloo-net` transport for the hosted auth API.
//!
//! Every request carries the public `apikey` header, is aborted after the
//! configured budget and comes back as a status plus raw body; `wire` decides
//! what the status means.

use std::time::Duration;

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use session::AuthError;
use web_sys::AbortController;

#[derive(Clone, Copy, Debug)]
pub enum Verb {
    Get,
    Post,
    Put,
}

/// Status and body of a completed exchange.
#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outgoing request description.
pub struct Call<'a> {
    pub verb: Verb,
    pub url: &'a str,
    pub anon_key: &'a str,
    pub access_token: Option<&'a str>,
    pub json: Option<String>,
    pub timeout: Duration,
}

/// Perform one request, aborting it when the budget runs out.
///
/// # Errors
///
/// Returns [`AuthError::ProviderUnavailable`] for network failures, aborts
/// and unreadable bodies. HTTP error statuses are returned as a [`Reply`].
pub async fn send(call: Call<'_>) -> Result<Reply, AuthError> {
    let controller = AbortController::new()
        .map_err(|_| AuthError::ProviderUnavailable("failed to initialize request timeout".to_owned()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let millis = u32::try_from(call.timeout.as_millis()).unwrap_or(u32::MAX);
    let _timeout = Timeout::new(millis, move || timeout_controller.abort());

    let mut builder = builder_for(call.verb, call.url)
        .header("apikey", call.anon_key)
        .abort_signal(Some(&signal));
    if let Some(token) = call.access_token {
        builder = builder.header("Authorization", &super::wire::bearer(token));
    }

    let request = match call.json {
        Some(payload) => builder.header("Content-Type", "application/json").body(payload),
        None => builder.build(),
    }
    .map_err(|err| AuthError::ProviderUnavailable(format!("failed to build request: {err}")))?;

    let response = request
        .send()
        .await
        .map_err(|err| AuthError::ProviderUnavailable(format!("request failed: {err}")))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(Reply { status, body })
}

fn builder_for(verb: Verb, url: &str) -> RequestBuilder {
    match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
    }
}
