//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` isolates `window` access behind the session crate's
//! `Navigator` and `Timer` seams.

#[cfg(feature = "hydrate")]
pub mod browser;
