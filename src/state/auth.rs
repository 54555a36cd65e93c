//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and role-dependent rendering. The fields are plain data;
//! the whole struct lives in an `RwSignal` provided via context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::auth::role::Role;
use crate::auth::session::Session;

/// Authentication state: the resolved session plus a loading flag that
/// stays set until the mount-time restore attempt settles.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// State used while the restore attempt is still in flight.
    #[must_use]
    pub fn restoring() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { session: None, loading: false }
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().map(|s| &s.profile.role)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.profile.email.as_str())
    }
}
