//! Durable session record kept in browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only code that touches the persisted session key.
//! `AuthContext` is its only caller for mutations.
//!
//! ERROR HANDLING
//! ==============
//! Writes surface failures to the caller. Reads never do: a record that
//! cannot be read, parsed or validated is purged and reported as absent, so a
//! corrupt record always degrades to an anonymous session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::net::types::{Identity, Profile};

/// Storage key holding the serialized session record.
pub const SESSION_KEY: &str = "campus_events_session";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("failed to encode session record: {0}")]
    Encode(String),
    #[error("failed to write session record: {0}")]
    Write(String),
    #[error("failed to read session record: {0}")]
    Read(String),
}

/// Key-value backend the session store persists into.
pub trait SessionStorage: Send + Sync {
    /// Read the raw value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write (quota, privacy mode).
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage` backend.
///
/// Holds no handle; the window's storage is looked up on every call so the
/// type stays `Send + Sync` and is safe to construct during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(js_error_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(js_error_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(js_error_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-process backend; used by tests and anywhere browser storage is absent.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds consistent string pairs.
        self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Persisted `{id, usernumber, role, profile}` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl SessionRecord {
    /// Structural checks beyond what serde enforces.
    fn is_well_formed(&self) -> bool {
        if self.identity.usernumber.trim().is_empty() {
            return false;
        }
        self.profile.as_ref().map_or(true, |p| !p.name.trim().is_empty())
    }
}

/// Reads and writes the session record under [`SESSION_KEY`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(backend: impl SessionStorage + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Serialize and persist the session, replacing any prior record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or the write fails.
    pub fn save(&self, identity: &Identity, profile: Option<&Profile>) -> Result<(), StorageError> {
        let record = SessionRecord { identity: identity.clone(), profile: profile.cloned() };
        let raw = serde_json::to_string(&record).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.backend.write(SESSION_KEY, &raw)
    }

    /// Load the persisted session.
    ///
    /// Returns `None` when nothing is stored. A record that fails to parse or
    /// validate is deleted before returning `None`.
    #[must_use]
    pub fn load(&self) -> Option<SessionRecord> {
        let raw = match self.backend.read(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                leptos::logging::warn!("session read failed: {e}");
                return None;
            }
        };

        match parse_record(&raw) {
            Some(record) => Some(record),
            None => {
                leptos::logging::warn!("discarding corrupt session record");
                self.clear();
                None
            }
        }
    }

    /// Delete the persisted session. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(SESSION_KEY) {
            leptos::logging::warn!("session clear failed: {e}");
        }
    }
}

/// Parse and validate a raw record; `None` for anything malformed.
fn parse_record(raw: &str) -> Option<SessionRecord> {
    serde_json::from_str::<SessionRecord>(raw)
        .ok()
        .filter(SessionRecord::is_well_formed)
}
