use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert!(store.is_empty());
    assert_eq!(store.get("id_token"), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryTokenStore::default();
    store.set("id_token", "abc123");
    assert_eq!(store.get("id_token").as_deref(), Some("abc123"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryTokenStore::default();
    store.set("id_token", "old");
    store.set("id_token", "new");
    assert_eq!(store.get("id_token").as_deref(), Some("new"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryTokenStore::default();
    let handle = store.clone();
    store.set("id_token", "shared");
    assert_eq!(handle.get("id_token").as_deref(), Some("shared"));
}

// =============================================================
// LocalStorageTokenStore outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_noop_without_browser() {
    let store = LocalStorageTokenStore;
    store.set("id_token", "abc123");
    assert_eq!(store.get("id_token"), None);
}
