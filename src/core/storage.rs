//! Key/value persistence.
//!
//! Everything the site remembers between visits goes through [`KeyValueStore`].
//! In the browser this is `localStorage`; on the host (and in tests) it is a
//! [`MemoryStore`]. There are no transactions: a read-modify-write from two tabs
//! simply races, last write wins.

use hashbrown::HashMap;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

/// Storage keys. Informal and unversioned: each feature owns its own keys.
pub mod keys {
    pub const VISITOR_ID: &str = "food3d-visitor-id";
    pub const VIEW_DATA: &str = "food3d-view-data";
    pub const USER_POINTS: &str = "userPoints";
    pub const USER_LEVEL: &str = "userLevel";
    pub const USER_NAME: &str = "userName";
    pub const USER_EMAIL: &str = "userEmail";
    pub const FOOD_PREFERENCE: &str = "foodPreference";
    pub const USER_BIRTHDAY: &str = "userBirthday";
    pub const MENU_SELECTION: &str = "food3d-menu-selection";
    pub const INTRO_SEEN: &str = "food3d-intro-seen";
    pub const MODE: &str = "food3d-mode";
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write to {key}")]
    WriteRejected { key: String },
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-process store. Interior mutability mirrors `localStorage`, whose setters
/// take `&self`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: std::cell::RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Read a string, treating an unreadable store like a missing key.
pub fn get_string(store: &impl KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(v) => v,
        Err(e) => {
            warn!(key, error = %e, "storage read failed");
            None
        }
    }
}

/// Decode a JSON blob. Missing keys and malformed JSON both fall back to
/// `T::default()`.
pub fn load_json<T>(store: &impl KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = get_string(store, key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(key, error = %e, "malformed JSON in storage; using defaults");
            T::default()
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set("k", "{not json").unwrap();
        let v: Vec<String> = load_json(&store, "k");
        assert!(v.is_empty());
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let store = MemoryStore::new();
        let v: HashMap<String, u64> = load_json(&store, "absent");
        assert!(v.is_empty());
    }

    #[test]
    fn json_round_trips_through_the_store() {
        let store = MemoryStore::new();
        save_json(&store, "list", &["a", "b"]).unwrap();
        assert_eq!(get_string(&store, "list").as_deref(), Some(r#"["a","b"]"#));
        let back: Vec<String> = load_json(&store, "list");
        assert_eq!(back, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn remove_clears_a_key() {
        let store = MemoryStore::new();
        store.set(keys::MODE, "dark").unwrap();
        assert_eq!(store.len(), 1);
        store.remove(keys::MODE).unwrap();
        assert!(store.is_empty());
    }
}
