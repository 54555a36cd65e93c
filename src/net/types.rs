//! Wire-level DTOs for the identity provider and document store.
//!
//! DESIGN
//! ======
//! These types mirror the managed backend's REST payloads so decoding
//! stays declarative; the document store's `fields.*.stringValue`
//! nesting is flattened here into the application-level profile record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::auth::role::Role;

/// Authenticated identity handle issued by the provider.
///
/// The application holds it by reference only; `uid` keys the profile
/// document and `id_token` authorizes store reads for this tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    pub id_token: String,
}

/// Application-level profile record keyed by the principal's uid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub role: Role,
}

/// Successful password-verification response.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGrant {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
    #[serde(default)]
    pub email_verified: bool,
}

impl PasswordGrant {
    #[must_use]
    pub fn into_principal(self) -> Principal {
        Principal {
            uid: self.local_id,
            email: self.email,
            email_verified: self.email_verified,
            id_token: self.id_token,
        }
    }
}

/// Error envelope returned by the provider's REST endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

/// Inner error detail; `message` carries the provider's error code
/// (e.g. `INVALID_PASSWORD`).
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// A user document as stored: typed string fields under `fields`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileDocument {
    pub fields: ProfileFields,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfileFields {
    pub email: StringField,
    pub role: StringField,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringField {
    pub string_value: String,
}

impl ProfileDocument {
    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            email: self.fields.email.string_value,
            role: Role::parse(&self.fields.role.string_value),
        }
    }
}
