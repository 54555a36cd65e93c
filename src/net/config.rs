//! Backend endpoint configuration.
//!
//! The API key and project id are baked in at compile time; the
//! fallbacks keep local development working without any environment
//! setup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const IDENTITY_ORIGIN: &str = "https://identitytoolkit.googleapis.com";
const STORE_ORIGIN: &str = "https://firestore.googleapis.com";

/// Managed-backend coordinates for the identity provider and document
/// store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub api_key: String,
    pub project_id: String,
}

impl BackendConfig {
    /// Build from `ODHIYATI_API_KEY` / `ODHIYATI_PROJECT_ID` captured at
    /// compile time, with demo fallbacks.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            api_key: option_env!("ODHIYATI_API_KEY").unwrap_or("demo-api-key").to_owned(),
            project_id: option_env!("ODHIYATI_PROJECT_ID").unwrap_or("odhiyati-demo").to_owned(),
        }
    }

    /// Password-verification endpoint.
    #[must_use]
    pub fn password_sign_in_url(&self) -> String {
        format!("{IDENTITY_ORIGIN}/v1/accounts:signInWithPassword?key={}", self.api_key)
    }

    /// Read endpoint for the profile document keyed by `uid`.
    #[must_use]
    pub fn profile_document_url(&self, uid: &str) -> String {
        format!(
            "{STORE_ORIGIN}/v1/projects/{}/databases/(default)/documents/users/{uid}",
            self.project_id
        )
    }

    /// Provider-hosted page opened in the federated sign-in popup.
    #[must_use]
    pub fn federated_popup_url(&self) -> String {
        format!("https://{}.firebaseapp.com/__/auth/handler?key={}", self.project_id, self.api_key)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
