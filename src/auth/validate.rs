//! Client-side login form validation.
//!
//! Field checks run before any provider call so malformed submissions
//! surface inline messages without a network round trip.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validated credentials, alive only for the duration of one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Field-scoped validation messages for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

pub const EMAIL_INVALID: &str = "البريد الإلكتروني غير صالح";
pub const PASSWORD_REQUIRED: &str = "يرجى إدخال كلمة المرور";

/// Validate a login submission. Email is trimmed before checking;
/// the password is taken as typed.
///
/// # Errors
///
/// Returns [`FieldErrors`] with a message per failing field.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let email = email.trim();
    let mut errors = FieldErrors::default();
    if !is_email_shaped(email) {
        errors.email = Some(EMAIL_INVALID);
    }
    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    }
    if errors.email.is_some() || errors.password.is_some() {
        return Err(errors);
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Loose RFC-5322-shaped check: one `@`, a non-empty local part, and a
/// dotted domain without whitespace. The provider remains the final
/// authority on deliverability.
fn is_email_shaped(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
