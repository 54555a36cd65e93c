//! Reactive per-tab state shared through Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` coordinates route guards and identity-dependent rendering,
//! `toast` backs the notification surface, and `ui` keeps transient
//! header chrome flags out of domain state.

pub mod auth;
pub mod toast;
pub mod ui;
