use super::*;

#[test]
fn validate_login_trims_email_and_accepts_valid_input() {
    let creds = validate_login("  user@example.com  ", "secret").unwrap();
    assert_eq!(creds.email, "user@example.com");
    assert_eq!(creds.password, "secret");
}

#[test]
fn validate_login_rejects_empty_password_only() {
    let errors = validate_login("user@example.com", "").unwrap_err();
    assert_eq!(errors.email, None);
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
}

#[test]
fn validate_login_rejects_malformed_email_only() {
    let errors = validate_login("not-an-email", "secret").unwrap_err();
    assert_eq!(errors.email, Some(EMAIL_INVALID));
    assert_eq!(errors.password, None);
}

#[test]
fn validate_login_reports_both_fields_together() {
    let errors = validate_login("   ", "").unwrap_err();
    assert_eq!(errors.email, Some(EMAIL_INVALID));
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
}

#[test]
fn email_shape_requires_local_part_and_dotted_domain() {
    assert!(validate_login("a@b.co", "x").is_ok());
    assert!(validate_login("@b.co", "x").is_err());
    assert!(validate_login("a@bco", "x").is_err());
    assert!(validate_login("a@b.", "x").is_err());
    assert!(validate_login("a@.co", "x").is_err());
    assert!(validate_login("a b@c.co", "x").is_err());
    assert!(validate_login("a@b@c.co", "x").is_err());
}
