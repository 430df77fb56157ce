//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`home`, `login`, `signup`, `reset_password`) talk to the
//! identity provider directly. Protected pages (`feed`, `update_password`)
//! render through `SessionGate`.

pub mod feed;
pub mod home;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod update_password;
