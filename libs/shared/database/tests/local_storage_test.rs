use std::fs;

use assert_matches::assert_matches;
use tempfile::TempDir;

use shared_database::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};

#[test]
fn file_store_returns_none_when_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(dir.path().join("storage.json"));

    assert_matches!(store.get("appointments"), Ok(None));
}

#[test]
fn file_store_persists_values_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("storage.json");

    let mut writer = FileKeyValueStore::new(&path);
    writer.set("appointments", "[]").unwrap();
    writer.set("theme", "dark").unwrap();

    let reader = FileKeyValueStore::new(&path);
    assert_eq!(reader.get("appointments").unwrap().as_deref(), Some("[]"));
    assert_eq!(reader.get("theme").unwrap().as_deref(), Some("dark"));
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn file_store_overwrites_existing_key() {
    let dir = TempDir::new().unwrap();
    let mut store = FileKeyValueStore::new(dir.path().join("storage.json"));

    store.set("appointments", "first").unwrap();
    store.set("appointments", "second").unwrap();

    assert_eq!(store.get("appointments").unwrap().as_deref(), Some("second"));
}

#[test]
fn file_store_reports_malformed_document_on_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "{not json").unwrap();

    let store = FileKeyValueStore::new(&path);
    assert_matches!(store.get("appointments"), Err(StorageError::Malformed(_)));
}

#[test]
fn file_store_rejects_non_string_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, r#"{"appointments": [1, 2]}"#).unwrap();

    let store = FileKeyValueStore::new(&path);
    assert_matches!(store.get("appointments"), Err(StorageError::Malformed(msg)) if msg.contains("array"));
}

#[test]
fn file_store_write_replaces_malformed_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "garbage").unwrap();

    let mut store = FileKeyValueStore::new(&path);
    store.set("appointments", "[]").unwrap();

    assert_eq!(store.get("appointments").unwrap().as_deref(), Some("[]"));
}

#[test]
fn memory_store_round_trips_values() {
    let mut store = MemoryKeyValueStore::new();
    assert_matches!(store.get("appointments"), Ok(None));

    store.set("appointments", "[]").unwrap();
    assert_eq!(store.get("appointments").unwrap().as_deref(), Some("[]"));
}

#[test]
fn memory_store_enforces_quota() {
    let mut store = MemoryKeyValueStore::with_quota(16);

    store.set("k", "0123456789").unwrap();
    assert_matches!(
        store.set("k", "0123456789abcdefg"),
        Err(StorageError::QuotaExceeded { quota: 16, .. })
    );
    assert_eq!(store.get("k").unwrap().as_deref(), Some("0123456789"));
}
