use super::*;
use crate::net::types::Role;

fn identity() -> Identity {
    Identity { id: 1, usernumber: "1234567".to_owned(), role: Role::Student }
}

fn profile() -> Profile {
    Profile {
        name: "Mina".to_owned(),
        department: Some("Computer Science".to_owned()),
        year: Some(2),
        semester: Some(4),
        course: Some("B.Tech".to_owned()),
        registered_events: Some(5),
        created_events: None,
    }
}

fn store_with(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(storage.clone())
}

/// Backend whose writes always fail, to check errors reach the caller.
struct ReadOnlyStorage;

impl SessionStorage for ReadOnlyStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

// =============================================================
// save / load
// =============================================================

#[test]
fn save_then_load_returns_same_identity_and_profile() {
    let storage = MemoryStorage::new();
    let store = store_with(&storage);

    store.save(&identity(), Some(&profile())).unwrap();

    let record = store.load().expect("record");
    assert_eq!(record.identity, identity());
    assert_eq!(record.profile, Some(profile()));
}

#[test]
fn save_without_profile_round_trips_absent_profile() {
    let storage = MemoryStorage::new();
    let store = store_with(&storage);

    store.save(&identity(), None).unwrap();

    let record = store.load().expect("record");
    assert_eq!(record.identity, identity());
    assert!(record.profile.is_none());
}

#[test]
fn save_overwrites_previous_record() {
    let storage = MemoryStorage::new();
    let store = store_with(&storage);
    let admin = Identity { id: 9, usernumber: "9999999".to_owned(), role: Role::Admin };

    store.save(&identity(), Some(&profile())).unwrap();
    store.save(&admin, None).unwrap();

    assert_eq!(store.load().expect("record").identity, admin);
}

#[test]
fn persisted_format_uses_flat_identity_keys() {
    let storage = MemoryStorage::new();
    let store = store_with(&storage);

    store.save(&identity(), None).unwrap();

    let raw = storage.read(SESSION_KEY).unwrap().expect("raw record");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["usernumber"], "1234567");
    assert_eq!(value["role"], "student");
    assert!(value["profile"].is_null());
}

#[test]
fn save_surfaces_write_failure() {
    let store = SessionStore::new(ReadOnlyStorage);
    let err = store.save(&identity(), None).unwrap_err();
    assert_eq!(err, StorageError::Write("quota exceeded".to_owned()));
}

#[test]
fn load_on_empty_store_is_none() {
    let store = store_with(&MemoryStorage::new());
    assert!(store.load().is_none());
}

// =============================================================
// Corruption recovery
// =============================================================

#[test]
fn truncated_record_is_purged_and_absent() {
    let storage = MemoryStorage::new();
    let store = store_with(&storage);
    store.save(&identity(), Some(&profile())).unwrap();

    let raw = storage.read(SESSION_KEY).unwrap().unwrap();
    storage.write(SESSION_KEY, &raw[..raw.len() / 2]).unwrap();

    assert!(store.load().is_none());
    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);
    assert!(store.load().is_none());
}

#[test]
fn unknown_role_is_treated_as_corruption() {
    let storage = MemoryStorage::new();
    storage
        .write(SESSION_KEY, r#"{"id":1,"usernumber":"1234567","role":"guest"}"#)
        .unwrap();
    let store = store_with(&storage);

    assert!(store.load().is_none());
    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);
}

#[test]
fn missing_role_is_treated_as_corruption() {
    let storage = MemoryStorage::new();
    storage.write(SESSION_KEY, r#"{"id":1,"usernumber":"1234567"}"#).unwrap();
    let store = store_with(&storage);

    assert!(store.load().is_none());
    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);
}

#[test]
fn blank_usernumber_is_treated_as_corruption() {
    let storage = MemoryStorage::new();
    storage
        .write(SESSION_KEY, r#"{"id":1,"usernumber":"  ","role":"student"}"#)
        .unwrap();
    let store = store_with(&storage);

    assert!(store.load().is_none());
    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);
}

#[test]
fn profile_without_name_is_treated_as_corruption() {
    let storage = MemoryStorage::new();
    storage
        .write(
            SESSION_KEY,
            r#"{"id":1,"usernumber":"1234567","role":"student","profile":{"name":""}}"#,
        )
        .unwrap();
    let store = store_with(&storage);

    assert!(store.load().is_none());
}

#[test]
fn non_object_json_is_treated_as_corruption() {
    let storage = MemoryStorage::new();
    storage.write(SESSION_KEY, "[1,2,3]").unwrap();
    let store = store_with(&storage);

    assert!(store.load().is_none());
    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_on_empty_store_is_noop() {
    let storage = MemoryStorage::new();
    let store = store_with(&storage);

    store.clear();
    store.clear();

    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);
    assert!(store.load().is_none());
}

#[test]
fn clear_removes_saved_record() {
    let storage = MemoryStorage::new();
    let store = store_with(&storage);
    store.save(&identity(), None).unwrap();

    store.clear();

    assert!(store.load().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_outside_browser_reads_nothing() {
    let store = SessionStore::browser();
    assert!(store.load().is_none());
    assert_eq!(store.save(&identity(), None), Err(StorageError::Unavailable));
}
