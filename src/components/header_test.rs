use super::*;
use crate::auth::session::Session;
use crate::net::types::{Principal, UserProfile};

fn signed_in(role: Role) -> AuthState {
    AuthState::signed_in(Session {
        principal: Principal {
            uid: "uid-1".to_owned(),
            email: "user@example.com".to_owned(),
            email_verified: true,
            id_token: "tok".to_owned(),
        },
        profile: UserProfile { email: "user@example.com".to_owned(), role },
    })
}

#[test]
fn avatar_initial_uppercases_first_character() {
    assert_eq!(avatar_initial("seller@example.com"), "S");
    assert_eq!(avatar_initial("علي@example.com"), "علي".chars().next().unwrap().to_string());
    assert_eq!(avatar_initial(""), "");
}

#[test]
fn dashboard_href_follows_the_shared_role_router() {
    assert_eq!(dashboard_href(&signed_in(Role::Admin)), Some("/admin"));
    assert_eq!(dashboard_href(&signed_in(Role::Seller)), Some("/seller"));
    assert_eq!(dashboard_href(&signed_in(Role::Buyer)), Some("/browse"));
    assert_eq!(dashboard_href(&signed_in(Role::Other("vip".to_owned()))), Some("/browse"));
    assert_eq!(dashboard_href(&AuthState::signed_out()), None);
}

#[test]
fn browse_link_shows_for_visitors_buyers_and_admins() {
    assert!(shows_browse_link(&AuthState::signed_out()));
    assert!(shows_browse_link(&signed_in(Role::Buyer)));
    assert!(shows_browse_link(&signed_in(Role::Admin)));
    assert!(!shows_browse_link(&signed_in(Role::Seller)));
}
