//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session_gate` wraps every protected page; the rest are presentational
//! pieces shared by the auth forms and the feed.

pub mod auth_card;
pub mod session_gate;
pub mod sign_out_button;
pub mod spinner;
