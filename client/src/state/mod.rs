//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` carries the composition-root services every auth-aware component
//! reads from context; `feed` is the feed page's local filter state.

pub mod auth;
pub mod feed;
