use crate::domain::ports::KeyValueStore;
use crate::utils::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

fn used_bytes(items: &BTreeMap<String, String>, skip: &str) -> usize {
    items
        .iter()
        .filter(|(k, _)| k.as_str() != skip)
        .map(|(k, v)| k.len() + v.len())
        .sum()
}

fn check_quota(
    items: &BTreeMap<String, String>,
    quota: Option<usize>,
    key: &str,
    value: &str,
) -> Result<(), StorageError> {
    if let Some(limit) = quota {
        if used_bytes(items, key) + key.len() + value.len() > limit {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                limit,
            });
        }
    }
    Ok(())
}

/// In-process store. Quota counts key and value bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            items: BTreeMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(&self.items, self.quota, key, value)?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.items.keys().cloned().collect())
    }
}

/// Store persisted as one JSON object (`{"key": "<json text>"}`) on disk.
/// The file is read on every access and rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    quota: Option<usize>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota: None,
        }
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Corrupted {
            key: self.path.display().to_string(),
            source,
        })
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(items).map_err(StorageError::Serialize)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Wrote {} entries to {}", items.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        check_quota(&items, self.quota, key, value)?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.save(&BTreeMap::new())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.load()?.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_quota_allows_replacing_value() {
        let mut store = MemoryStore::with_quota(10);
        store.set_item("k", "123456789").unwrap();
        // 覆寫同一個 key 時不重複計算舊值
        store.set_item("k", "987654321").unwrap();
        assert!(store.set_item("k2", "x").is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_persists_between_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::new(&path);
        store.set_item("user", r#"{"name":"John"}"#).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get_item("user").unwrap().as_deref(),
            Some(r#"{"name":"John"}"#)
        );
        assert_eq!(reopened.keys().unwrap(), vec!["user".to_string()]);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("none.json"));
        assert!(store.get_item("x").unwrap().is_none());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_corrupted_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.get_item("x"),
            Err(StorageError::Corrupted { .. })
        ));
        // clear 會重寫檔案，之後恢復正常
        store.clear().unwrap();
        assert!(store.get_item("x").unwrap().is_none());
    }

    #[test]
    fn test_file_store_quota() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("q.json")).with_quota(8);
        store.set_item("a", "1").unwrap();
        assert!(matches!(
            store.set_item("b", "too long"),
            Err(StorageError::QuotaExceeded { limit: 8, .. })
        ));
    }
}
