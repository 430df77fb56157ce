//! Networking for the hosted identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` implements `session::IdentityProvider`, `wire` defines the REST
//! schema and status handling, `token_store` keeps the session tokens in the
//! browser and `http` is the `gloo-net` transport underneath.

#[cfg(feature = "hydrate")]
pub mod http;
pub mod identity;
pub mod token_store;
pub mod wire;
