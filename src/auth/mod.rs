//! Session bootstrap and role routing, independent of any rendering.
//!
//! ARCHITECTURE
//! ============
//! The identity provider and profile store are injected as ports
//! (`session::IdentityProvider`, `session::ProfileStore`) so the sign-in
//! flows stay testable against fakes; `net` supplies the live
//! implementations.

pub mod error;
pub mod role;
pub mod session;
pub mod validate;
