//! Live clients for the managed backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` talks to the identity provider (password verification and
//! the popup-based federated flow), `profile` reads the user document
//! store, `config` builds endpoint URLs, and `types` defines the wire
//! schema shared between them.

pub mod config;
pub mod identity;
pub mod profile;
pub mod types;
