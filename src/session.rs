//! Ephemeral session-scoped preference storage.
//!
//! Preferences live in memory as opaque JSON blobs for the life of one
//! session; losing them is inconsequential because every read falls back to
//! the type's default. An undecodable blob is treated the same as a missing
//! one (logged, then ignored).

use std::collections::HashMap;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, Value>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a typed value, falling back to `T::default()` when the key is
    /// absent or the stored blob no longer decodes as `T`.
    pub fn get_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.entries.get(key) {
            None => T::default(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
                warn!("session key {key:?} holds an undecodable blob: {err}");
                T::default()
            }),
        }
    }

    /// Store a typed value as an opaque JSON blob. A value that fails to
    /// serialize is dropped with a warning; session data is best-effort.
    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(blob) => {
                self.entries.insert(key.to_string(), blob);
            }
            Err(err) => warn!("could not store session key {key:?}: {err}"),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        favorite_region: String,
        newsletter: bool,
    }

    #[test]
    fn round_trips_typed_values() {
        let mut session = SessionStore::new();
        let prefs = Prefs {
            favorite_region: "Tamil Nadu".into(),
            newsletter: true,
        };
        session.put("prefs", &prefs);
        assert_eq!(session.get_or_default::<Prefs>("prefs"), prefs);
    }

    #[test]
    fn missing_key_yields_default() {
        let session = SessionStore::new();
        assert_eq!(session.get_or_default::<Prefs>("prefs"), Prefs::default());
    }

    #[test]
    fn undecodable_blob_yields_default() {
        let mut session = SessionStore::new();
        session.put("prefs", &vec![1, 2, 3]);
        assert_eq!(session.get_or_default::<Prefs>("prefs"), Prefs::default());
    }

    #[test]
    fn clear_empties_the_store() {
        let mut session = SessionStore::new();
        session.put("a", &1);
        session.put("b", &2);
        assert_eq!(session.len(), 2);
        session.clear();
        assert!(session.is_empty());
    }
}
