use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::auth::role::Role;

type CallLog = Rc<RefCell<Vec<&'static str>>>;

struct FakeProvider {
    log: CallLog,
    password_result: Result<Principal, ProviderError>,
    federated_result: Result<Principal, ProviderError>,
}

#[async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn verify_password(&self, _email: &str, _password: &str) -> Result<Principal, ProviderError> {
        self.log.borrow_mut().push("verify_password");
        self.password_result.clone()
    }

    async fn federated_sign_in(&self) -> Result<Principal, ProviderError> {
        self.log.borrow_mut().push("federated_sign_in");
        self.federated_result.clone()
    }

    async fn revoke_session(&self, _principal: &Principal) -> Result<(), ProviderError> {
        self.log.borrow_mut().push("revoke_session");
        Ok(())
    }
}

struct FakeStore {
    log: CallLog,
    profiles: HashMap<String, UserProfile>,
}

#[async_trait(?Send)]
impl ProfileStore for FakeStore {
    async fn fetch_profile(&self, uid: &str) -> Result<Option<UserProfile>, ProviderError> {
        self.log.borrow_mut().push("fetch_profile");
        Ok(self.profiles.get(uid).cloned())
    }
}

fn principal(uid: &str) -> Principal {
    Principal {
        uid: uid.to_owned(),
        email: "user@example.com".to_owned(),
        email_verified: true,
        id_token: "tok".to_owned(),
    }
}

fn profile(role: Role) -> UserProfile {
    UserProfile { email: "user@example.com".to_owned(), role }
}

fn harness(
    password_result: Result<Principal, ProviderError>,
    federated_result: Result<Principal, ProviderError>,
    profiles: &[(&str, UserProfile)],
) -> (FakeProvider, FakeStore, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let provider = FakeProvider {
        log: Rc::clone(&log),
        password_result,
        federated_result,
    };
    let store = FakeStore {
        log: Rc::clone(&log),
        profiles: profiles
            .iter()
            .map(|(uid, p)| ((*uid).to_owned(), p.clone()))
            .collect(),
    };
    (provider, store, log)
}

#[test]
fn password_sign_in_resolves_admin_session_routed_to_admin() {
    let (provider, store, log) = harness(
        Ok(principal("uid-1")),
        Err(ProviderError::unavailable()),
        &[("uid-1", profile(Role::Admin))],
    );

    let session =
        block_on(sign_in_with_password(&provider, &store, "user@example.com", "secret")).unwrap();

    assert_eq!(session.profile.role, Role::Admin);
    assert_eq!(session.profile.role.dashboard_path(), "/admin");
    // Profile lookup is issued strictly after authentication resolves.
    assert_eq!(*log.borrow(), vec!["verify_password", "fetch_profile"]);
}

#[test]
fn password_sign_in_without_profile_fails_with_profile_not_found() {
    let (provider, store, _log) =
        harness(Ok(principal("uid-1")), Err(ProviderError::unavailable()), &[]);

    let err =
        block_on(sign_in_with_password(&provider, &store, "user@example.com", "secret")).unwrap_err();

    assert_eq!(err, SignInError::ProfileNotFound);
}

#[test]
fn empty_password_never_invokes_the_provider() {
    let (provider, store, log) = harness(
        Ok(principal("uid-1")),
        Err(ProviderError::unavailable()),
        &[("uid-1", profile(Role::Buyer))],
    );

    let err = block_on(sign_in_with_password(&provider, &store, "user@example.com", "")).unwrap_err();

    assert!(matches!(err, SignInError::Validation(_)));
    assert!(log.borrow().is_empty());
}

#[test]
fn provider_rejection_is_classified() {
    let (provider, store, _log) = harness(
        Err(ProviderError::new("INVALID_PASSWORD", "bad password")),
        Err(ProviderError::unavailable()),
        &[],
    );

    let err =
        block_on(sign_in_with_password(&provider, &store, "user@example.com", "wrong")).unwrap_err();

    assert_eq!(err, SignInError::InvalidCredentials);
}

#[test]
fn federated_sign_in_with_profile_establishes_session() {
    let (provider, store, log) = harness(
        Err(ProviderError::unavailable()),
        Ok(principal("uid-2")),
        &[("uid-2", profile(Role::Seller))],
    );

    let outcome = block_on(sign_in_with_federated(&provider, &store)).unwrap();

    match outcome {
        FederatedOutcome::SignedIn(session) => assert_eq!(session.profile.role, Role::Seller),
        FederatedOutcome::NeedsRegistration => panic!("expected an established session"),
    }
    assert_eq!(*log.borrow(), vec!["federated_sign_in", "fetch_profile"]);
}

#[test]
fn federated_sign_in_without_profile_revokes_before_registration_redirect() {
    let (provider, store, log) =
        harness(Err(ProviderError::unavailable()), Ok(principal("uid-3")), &[]);

    let outcome = block_on(sign_in_with_federated(&provider, &store)).unwrap();

    assert_eq!(outcome, FederatedOutcome::NeedsRegistration);
    assert_eq!(*log.borrow(), vec!["federated_sign_in", "fetch_profile", "revoke_session"]);
}

#[test]
fn federated_cancellation_is_classified_and_silent() {
    let (provider, store, _log) = harness(
        Err(ProviderError::unavailable()),
        Err(ProviderError::new("cancelled-popup-request", "superseded")),
        &[],
    );

    let err = block_on(sign_in_with_federated(&provider, &store)).unwrap_err();

    assert_eq!(err, SignInError::PopupCancelled);
    assert!(err.is_silent());
}
