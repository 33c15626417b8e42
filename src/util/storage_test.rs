use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.get("anything").is_none());
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    assert_eq!(storage.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("k", "v1");
    storage.set("k", "v2");
    assert_eq!(storage.get("k").as_deref(), Some("v2"));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    storage.remove("k");
    storage.remove("k");
    assert!(storage.get("k").is_none());
}
