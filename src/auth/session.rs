//! Session bootstrap: authenticate, then resolve the profile record.
//!
//! ARCHITECTURE
//! ============
//! Both flows authenticate against the injected [`IdentityProvider`]
//! and only then read the [`ProfileStore`] — never concurrently, never
//! speculatively. A principal without a profile document is a distinct
//! failure, not a default: the password path reports
//! [`SignInError::ProfileNotFound`] and leaves provider state alone,
//! while the federated path revokes the fresh provider session and asks
//! the caller to route the user into registration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use async_trait::async_trait;

use super::error::{ProviderError, SignInError, classify};
use super::validate::validate_login;
use crate::net::types::{Principal, UserProfile};

/// In-memory pairing of a principal and its profile for this tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub principal: Principal,
    pub profile: UserProfile,
}

/// Identity provider port.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Verify an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns the provider's raw error code on rejection.
    async fn verify_password(&self, email: &str, password: &str) -> Result<Principal, ProviderError>;

    /// Run the provider-managed interactive flow (popup).
    ///
    /// # Errors
    ///
    /// Returns the provider's raw error code, including the popup
    /// lifecycle codes.
    async fn federated_sign_in(&self) -> Result<Principal, ProviderError>;

    /// Tear down the provider-side session for `principal`.
    ///
    /// # Errors
    ///
    /// Returns the provider's raw error code if teardown fails.
    async fn revoke_session(&self, principal: &Principal) -> Result<(), ProviderError>;
}

/// Profile document store port.
#[async_trait(?Send)]
pub trait ProfileStore {
    /// Fetch the profile document keyed by `uid`; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns the store's raw error code on anything but a clean
    /// found/not-found answer.
    async fn fetch_profile(&self, uid: &str) -> Result<Option<UserProfile>, ProviderError>;
}

/// Terminal outcomes of the federated flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FederatedOutcome {
    SignedIn(Session),
    /// Authenticated identity with no profile record: provider session
    /// already revoked, caller should route to registration.
    NeedsRegistration,
}

/// Password sign-in: validate, verify, then resolve the profile.
///
/// # Errors
///
/// [`SignInError::Validation`] without contacting the provider,
/// classified provider failures, or [`SignInError::ProfileNotFound`]
/// when the authenticated principal has no profile document.
pub async fn sign_in_with_password(
    provider: &impl IdentityProvider,
    store: &impl ProfileStore,
    email: &str,
    password: &str,
) -> Result<Session, SignInError> {
    let creds = validate_login(email, password).map_err(SignInError::Validation)?;
    let principal = provider
        .verify_password(&creds.email, &creds.password)
        .await
        .map_err(|e| classify(&e))?;
    let profile = store
        .fetch_profile(&principal.uid)
        .await
        .map_err(|e| classify(&e))?
        .ok_or(SignInError::ProfileNotFound)?;
    Ok(Session { principal, profile })
}

/// Federated sign-in via the provider's interactive flow.
///
/// Authentication success alone never grants access: a missing profile
/// revokes the provider session before reporting
/// [`FederatedOutcome::NeedsRegistration`].
///
/// # Errors
///
/// Classified provider failures, including the popup lifecycle codes.
pub async fn sign_in_with_federated(
    provider: &impl IdentityProvider,
    store: &impl ProfileStore,
) -> Result<FederatedOutcome, SignInError> {
    let principal = provider.federated_sign_in().await.map_err(|e| classify(&e))?;
    let profile = store
        .fetch_profile(&principal.uid)
        .await
        .map_err(|e| classify(&e))?;
    match profile {
        Some(profile) => Ok(FederatedOutcome::SignedIn(Session { principal, profile })),
        None => {
            if let Err(e) = provider.revoke_session(&principal).await {
                leptos::logging::warn!("revoke after unprofiled federated sign-in failed: {e}");
            }
            Ok(FederatedOutcome::NeedsRegistration)
        }
    }
}
