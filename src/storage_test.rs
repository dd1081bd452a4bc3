use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_get_round_trip() {
    let store = MemoryStore::new();
    store.set("token", "abc");
    assert_eq!(store.get("token"), Some("abc".to_owned()));
}

#[test]
fn memory_store_remove_deletes_key() {
    let store = MemoryStore::new();
    store.set("token", "abc");
    store.remove("token");
    assert_eq!(store.get("token"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let observer = store.clone();
    store.set("user", "{}");
    assert_eq!(observer.get("user"), Some("{}".to_owned()));
    assert_eq!(observer.len(), 1);
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryStore::new();
    store.set("token", "old");
    store.set("token", "new");
    assert_eq!(store.get("token"), Some("new".to_owned()));
}

// =============================================================
// BrowserStorage off-browser fallback
// =============================================================

#[test]
fn browser_storage_reads_none_outside_browser() {
    let store = BrowserStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
}
