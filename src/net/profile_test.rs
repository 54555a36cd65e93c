#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;

use super::*;

#[test]
fn profile_reads_are_unavailable_off_browser() {
    let store = RestProfileStore::new(BackendConfig {
        api_key: "key-1".to_owned(),
        project_id: "proj-1".to_owned(),
    });
    let err = block_on(store.fetch_profile("uid-1")).unwrap_err();
    assert_eq!(err.code, "unavailable");
}
