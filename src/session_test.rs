use super::*;
use crate::storage::MemoryStore;

fn vault() -> (SessionVault<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    (SessionVault::new(store.clone()), store)
}

// =============================================================
// save / clear
// =============================================================

#[test]
fn save_writes_both_keys() {
    let (vault, store) = vault();
    vault.save("t1", &serde_json::json!({"token": "t1", "id": 7}));

    assert_eq!(store.get(TOKEN_KEY), Some("t1".to_owned()));
    assert!(store.get(USER_KEY).is_some());
}

#[test]
fn clear_removes_both_keys() {
    let (vault, store) = vault();
    vault.save("t1", &serde_json::json!({"id": 7}));
    vault.clear();

    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn clear_without_session_is_a_no_op() {
    let (vault, store) = vault();
    vault.clear();
    assert!(store.is_empty());
}

// =============================================================
// reads
// =============================================================

#[test]
fn user_round_trips_through_storage() {
    let (vault, _) = vault();
    vault.save("t1", &serde_json::json!({"id": 7, "email": "a@b.com"}));

    let user = vault.user().expect("stored user");
    assert_eq!(user.id, Some(7));
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
}

#[test]
fn user_missing_reads_as_none() {
    let (vault, _) = vault();
    assert!(vault.user().is_none());
}

#[test]
fn user_malformed_json_reads_as_none() {
    let (vault, store) = vault();
    store.set(USER_KEY, "{not json");
    assert!(vault.user().is_none());
}

#[test]
fn session_requires_both_keys() {
    let (vault, store) = vault();
    store.set(TOKEN_KEY, "t1");
    assert!(vault.session().is_none());

    store.set(USER_KEY, "{\"id\": 7}");
    let session = vault.session().expect("complete session");
    assert_eq!(session.token, "t1");
    assert_eq!(session.user.id, Some(7));
}
