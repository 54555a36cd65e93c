//! Live profile-document store client.
//!
//! A missing document is a clean `None`, never an error — the
//! bootstrapper decides what absence means for each flow. Reads are
//! authorized with the tab's cached principal token when one exists.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use async_trait::async_trait;

use super::config::BackendConfig;
#[cfg(feature = "hydrate")]
use super::identity::RestIdentityProvider;
#[cfg(feature = "hydrate")]
use super::types::ProfileDocument;
use super::types::UserProfile;
use crate::auth::error::ProviderError;
use crate::auth::session::ProfileStore;

/// Document-store client for the `users` collection.
#[derive(Clone, Debug)]
pub struct RestProfileStore {
    config: BackendConfig,
}

impl RestProfileStore {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ProfileStore for RestProfileStore {
    async fn fetch_profile(&self, uid: &str) -> Result<Option<UserProfile>, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.profile_document_url(uid);
            let mut request = gloo_net::http::Request::get(&url);
            if let Some(principal) =
                RestIdentityProvider::new(self.config.clone()).current_principal()
            {
                request = request.header("Authorization", &format!("Bearer {}", principal.id_token));
            }
            let resp = request
                .send()
                .await
                .map_err(|e| ProviderError::new("network", e.to_string()))?;
            if resp.status() == 404 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(ProviderError::new(
                    format!("http-{}", resp.status()),
                    "profile document read failed",
                ));
            }
            let document: ProfileDocument = resp
                .json()
                .await
                .map_err(|e| ProviderError::new("decode", e.to_string()))?;
            Ok(Some(document.into_profile()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (uid, &self.config);
            Err(ProviderError::unavailable())
        }
    }
}
