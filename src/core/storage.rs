use crate::domain::ports::KeyValueStore;
use crate::utils::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON value store over an injected key/value backend.
///
/// Every operation reports failures as [`StorageError`]; [`Storage::get`]
/// and [`Storage::get_or`] are the lenient readers that log and fall back.
#[derive(Debug, Clone)]
pub struct Storage<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value).map_err(StorageError::Serialize)?;
        tracing::debug!("Storing '{}' ({} bytes)", key, text.len());
        self.backend.set_item(key, &text)
    }

    /// `Ok(None)` when the key is absent or holds an empty string.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get_item(key)? {
            Some(text) if !text.is_empty() => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| StorageError::Corrupted {
                    key: key.to_string(),
                    source,
                }),
            _ => Ok(None),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring unreadable value for '{}': {}", key, e);
                None
            }
        }
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        tracing::debug!("Removing '{}'", key);
        self.backend.remove_item(key)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        tracing::debug!("Clearing store");
        self.backend.clear()
    }

    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.backend.keys()
    }
}
