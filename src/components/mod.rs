//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome while reading/writing shared state
//! from Leptos context providers; route-level orchestration stays in
//! `pages`.

pub mod header;
pub mod theme_toggle;
pub mod toast_host;
