use super::*;
use crate::net::types::{Principal, UserProfile};

fn session(role: Role) -> Session {
    Session {
        principal: Principal {
            uid: "uid-1".to_owned(),
            email: "user@example.com".to_owned(),
            email_verified: true,
            id_token: "tok".to_owned(),
        },
        profile: UserProfile { email: "user@example.com".to_owned(), role },
    }
}

#[test]
fn default_state_is_signed_out_and_not_loading() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
    assert_eq!(state.role(), None);
    assert_eq!(state.email(), None);
}

#[test]
fn restoring_state_reports_loading() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(state.session.is_none());
}

#[test]
fn signed_in_state_exposes_role_and_email() {
    let state = AuthState::signed_in(session(Role::Seller));
    assert!(!state.loading);
    assert_eq!(state.role(), Some(&Role::Seller));
    assert_eq!(state.email(), Some("user@example.com"));
}

#[test]
fn signed_out_clears_the_session() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert!(state.session.is_none());
}
