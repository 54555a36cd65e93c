//! Live identity-provider client.
//!
//! Password verification is a single REST call. The federated flow
//! opens the provider-hosted popup and polls for the credential the
//! hosted page writes back into sessionStorage; the popup closing
//! first, the browser refusing to open it, and a duplicate in-flight
//! request each surface as their own provider code for classification.
//!
//! On success the principal is cached in sessionStorage, scoping the
//! session to the lifetime of the tab. `revoke_session` clears it.
//!
//! Client-side (hydrate): real HTTP/popup behavior.
//! Server-side (SSR): stubs that report the provider as unavailable.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

#[cfg(feature = "hydrate")]
use std::cell::Cell;

use async_trait::async_trait;

use super::config::BackendConfig;
use super::types::Principal;
#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, PasswordGrant};
use crate::auth::error::ProviderError;
use crate::auth::session::IdentityProvider;
#[cfg(feature = "hydrate")]
use crate::util::storage::session_save_json;
use crate::util::storage::{session_load_json, session_remove};

/// sessionStorage key holding the signed-in principal for this tab.
const PRINCIPAL_KEY: &str = "odhiyati.session.principal";
/// sessionStorage key the hosted popup page writes the credential to.
const FEDERATED_CREDENTIAL_KEY: &str = "odhiyati.federated.credential";
#[cfg(feature = "hydrate")]
const POPUP_POLL_MS: u32 = 250;

#[cfg(feature = "hydrate")]
thread_local! {
    static POPUP_IN_FLIGHT: Cell<bool> = const { Cell::new(false) };
}

/// Identity-provider client over the managed backend's REST surface.
#[derive(Clone, Debug)]
pub struct RestIdentityProvider {
    config: BackendConfig,
}

impl RestIdentityProvider {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    /// Principal cached for this tab, if any. Used to restore the
    /// session on app mount.
    #[must_use]
    pub fn current_principal(&self) -> Option<Principal> {
        session_load_json(PRINCIPAL_KEY)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for RestIdentityProvider {
    async fn verify_password(&self, email: &str, password: &str) -> Result<Principal, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            });
            let resp = gloo_net::http::Request::post(&self.config.password_sign_in_url())
                .json(&payload)
                .map_err(|e| ProviderError::new("network", e.to_string()))?
                .send()
                .await
                .map_err(|e| ProviderError::new("network", e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let code = resp
                    .json::<ApiErrorBody>()
                    .await
                    .map(|body| body.error.message)
                    .unwrap_or_else(|_| format!("http-{status}"));
                return Err(ProviderError::new(code, "password verification rejected"));
            }
            let grant: PasswordGrant = resp
                .json()
                .await
                .map_err(|e| ProviderError::new("decode", e.to_string()))?;
            let principal = grant.into_principal();
            session_save_json(PRINCIPAL_KEY, &principal);
            Ok(principal)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, &self.config);
            Err(ProviderError::unavailable())
        }
    }

    async fn federated_sign_in(&self) -> Result<Principal, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            if POPUP_IN_FLIGHT.with(Cell::get) {
                return Err(ProviderError::new(
                    "cancelled-popup-request",
                    "a sign-in popup is already open",
                ));
            }
            let window = web_sys::window().ok_or_else(ProviderError::unavailable)?;
            session_remove(FEDERATED_CREDENTIAL_KEY);
            let popup = window
                .open_with_url_and_target_and_features(
                    &self.config.federated_popup_url(),
                    "odhiyati-signin",
                    "popup,width=480,height=640",
                )
                .ok()
                .flatten()
                .ok_or_else(|| {
                    ProviderError::new("popup-blocked", "the browser refused to open the sign-in window")
                })?;
            POPUP_IN_FLIGHT.with(|flag| flag.set(true));
            let result = wait_for_popup_credential(&popup).await;
            POPUP_IN_FLIGHT.with(|flag| flag.set(false));
            let principal = result?;
            session_save_json(PRINCIPAL_KEY, &principal);
            Ok(principal)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.config;
            Err(ProviderError::unavailable())
        }
    }

    async fn revoke_session(&self, _principal: &Principal) -> Result<(), ProviderError> {
        session_remove(PRINCIPAL_KEY);
        session_remove(FEDERATED_CREDENTIAL_KEY);
        Ok(())
    }
}

/// Poll until the hosted page hands back a credential or the popup is
/// closed. Closing the popup is a terminal outcome, not an exception;
/// no cleanup is needed beyond the caller resetting its in-flight flag.
#[cfg(feature = "hydrate")]
async fn wait_for_popup_credential(popup: &web_sys::Window) -> Result<Principal, ProviderError> {
    loop {
        gloo_timers::future::TimeoutFuture::new(POPUP_POLL_MS).await;
        if let Some(principal) = session_load_json::<Principal>(FEDERATED_CREDENTIAL_KEY) {
            session_remove(FEDERATED_CREDENTIAL_KEY);
            return Ok(principal);
        }
        if popup.closed().unwrap_or(true) {
            return Err(ProviderError::new(
                "popup-closed-by-user",
                "the sign-in window was closed before completing",
            ));
        }
    }
}
