use super::*;

#[test]
fn parse_recognizes_known_roles() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("seller"), Role::Seller);
    assert_eq!(Role::parse("buyer"), Role::Buyer);
}

#[test]
fn parse_preserves_unrecognized_roles_verbatim() {
    assert_eq!(Role::parse("moderator"), Role::Other("moderator".to_owned()));
    assert_eq!(Role::parse(""), Role::Other(String::new()));
}

#[test]
fn dashboard_path_is_total_over_all_roles() {
    let cases = [
        (Role::Admin, "/admin"),
        (Role::Seller, "/seller"),
        (Role::Buyer, "/browse"),
        (Role::Other("moderator".to_owned()), "/browse"),
        (Role::Other(String::new()), "/browse"),
    ];
    for (role, expected) in cases {
        assert_eq!(role.dashboard_path(), expected);
    }
}

#[test]
fn label_localizes_known_roles_and_echoes_unknown() {
    assert_eq!(Role::Admin.label(), "مدير");
    assert_eq!(Role::Seller.label(), "بائع");
    assert_eq!(Role::Buyer.label(), "مشتري");
    assert_eq!(Role::Other("vip".to_owned()).label(), "vip");
}

#[test]
fn browse_link_shown_for_buyer_and_admin_only() {
    assert!(Role::Admin.browses_listings());
    assert!(Role::Buyer.browses_listings());
    assert!(!Role::Seller.browses_listings());
    assert!(!Role::Other("vip".to_owned()).browses_listings());
}

#[test]
fn serde_round_trips_as_bare_string() {
    let json = serde_json::to_string(&Role::Seller).unwrap();
    assert_eq!(json, "\"seller\"");
    let back: Role = serde_json::from_str("\"moderator\"").unwrap();
    assert_eq!(back, Role::Other("moderator".to_owned()));
}
