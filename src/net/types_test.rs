use super::*;

#[test]
fn password_grant_decodes_and_converts_to_principal() {
    let json = r#"{
        "localId": "uid-1",
        "email": "user@example.com",
        "idToken": "tok",
        "registered": true
    }"#;
    let grant: PasswordGrant = serde_json::from_str(json).unwrap();
    let principal = grant.into_principal();
    assert_eq!(principal.uid, "uid-1");
    assert_eq!(principal.email, "user@example.com");
    assert_eq!(principal.id_token, "tok");
    assert!(!principal.email_verified);
}

#[test]
fn api_error_body_exposes_provider_code() {
    let json = r#"{"error": {"code": 400, "message": "INVALID_PASSWORD"}}"#;
    let body: ApiErrorBody = serde_json::from_str(json).unwrap();
    assert_eq!(body.error.message, "INVALID_PASSWORD");
}

#[test]
fn profile_document_flattens_string_fields() {
    let json = r#"{
        "name": "projects/demo/databases/(default)/documents/users/uid-1",
        "fields": {
            "email": {"stringValue": "seller@example.com"},
            "role": {"stringValue": "seller"}
        }
    }"#;
    let doc: ProfileDocument = serde_json::from_str(json).unwrap();
    let profile = doc.into_profile();
    assert_eq!(profile.email, "seller@example.com");
    assert_eq!(profile.role, crate::auth::role::Role::Seller);
}

#[test]
fn profile_document_keeps_unrecognized_role_as_is() {
    let json = r#"{"fields": {"email": {"stringValue": "x@y.co"}, "role": {"stringValue": "auditor"}}}"#;
    let doc: ProfileDocument = serde_json::from_str(json).unwrap();
    assert_eq!(
        doc.into_profile().role,
        crate::auth::role::Role::Other("auditor".to_owned())
    );
}

#[test]
fn principal_serde_round_trips_for_tab_storage() {
    let principal = Principal {
        uid: "uid-9".to_owned(),
        email: "a@b.co".to_owned(),
        email_verified: true,
        id_token: "tok".to_owned(),
    };
    let raw = serde_json::to_string(&principal).unwrap();
    let back: Principal = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, principal);
}
