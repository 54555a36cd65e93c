//! Classified sign-in failures.
//!
//! ERROR HANDLING
//! ==============
//! Provider and store errors surface as [`ProviderError`] with the
//! backend's raw code string; [`classify`] folds every code into the
//! closed [`SignInError`] taxonomy so new backend codes land in
//! `Unknown` instead of falling through unhandled. Each variant maps to
//! exactly one localized message; none of these abort the app — the
//! user stays on the current view and may retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::validate::FieldErrors;

/// Raw error reported by the identity provider or document store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ProviderError {
    /// Backend error code, e.g. `INVALID_PASSWORD` or `popup-blocked`.
    pub code: String,
    pub message: String,
}

impl ProviderError {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }

    /// Error for flows invoked outside a browser context (SSR stubs).
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new("unavailable", "not available on server")
    }
}

/// Everything a sign-in attempt can fail with, classified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("too many attempts")]
    RateLimited,
    #[error("no profile record for authenticated principal")]
    ProfileNotFound,
    #[error("sign-in popup closed before completing")]
    PopupClosed,
    #[error("sign-in popup blocked by the browser")]
    PopupBlocked,
    #[error("sign-in popup superseded by a newer request")]
    PopupCancelled,
    #[error("unrecognized provider error: {0}")]
    Unknown(String),
}

/// Total mapping from provider error codes to the closed taxonomy.
#[must_use]
pub fn classify(err: &ProviderError) -> SignInError {
    match err.code.as_str() {
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            SignInError::InvalidCredentials
        }
        "TOO_MANY_ATTEMPTS_TRY_LATER" => SignInError::RateLimited,
        "popup-closed-by-user" => SignInError::PopupClosed,
        "popup-blocked" => SignInError::PopupBlocked,
        "cancelled-popup-request" => SignInError::PopupCancelled,
        other => SignInError::Unknown(other.to_owned()),
    }
}

impl SignInError {
    /// Localized message shown in the failure notification.
    ///
    /// Validation errors render inline next to their fields, so the
    /// generic message here is only a fallback.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "البريد الإلكتروني أو كلمة المرور غير صحيحة",
            Self::RateLimited => "تم تجاوز عدد المحاولات، يرجى المحاولة لاحقاً",
            Self::ProfileNotFound => "لم يتم العثور على بيانات المستخدم",
            Self::PopupClosed => "تم إغلاق نافذة تسجيل الدخول قبل الإكمال",
            Self::PopupBlocked => "يرجى السماح بالنوافذ المنبثقة في المتصفح",
            Self::Validation(_) | Self::PopupCancelled | Self::Unknown(_) => {
                "حدث خطأ أثناء تسجيل الدخول"
            }
        }
    }

    /// User-initiated cancellation is not an error; it produces no
    /// notification at all.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::PopupCancelled)
    }
}
