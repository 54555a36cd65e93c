//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard routes apply identical redirect behavior: wait for the
//! restore attempt, send signed-out visitors to the login page, and
//! send signed-in visitors with the wrong role to their own dashboard.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::auth::role::Role;
use crate::state::auth::AuthState;

/// Where a view reserved for `required` must send the visitor, if
/// anywhere. `None` while the restore attempt is still loading or when
/// the visitor may stay.
#[must_use]
pub fn redirect_target(state: &AuthState, required: &Role) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match state.role() {
        None => Some("/login"),
        Some(role) if role == required => None,
        Some(role) => Some(role.dashboard_path()),
    }
}

/// Keep a dashboard route exclusive to `required`, redirecting everyone
/// else once auth has settled.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&auth.get(), &required) {
            navigate(target, NavigateOptions::default());
        }
    });
}
