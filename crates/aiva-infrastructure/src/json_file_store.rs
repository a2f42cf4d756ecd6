//! File-backed LocalStore implementation.

use crate::paths::AivaPaths;
use aiva_core::LocalStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A `LocalStore` that keeps one JSON document per key on disk.
///
/// Directory layout:
/// ```text
/// base_dir/
/// ├── aiAssistant_messages.json
/// └── aiAssistant_context.json
/// ```
///
/// The store treats values as opaque strings; the conversation store owns
/// the JSON encoding, this type owns the files.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `base_dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)
            .await
            .context("Failed to create store directory")?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location (~/.aiva).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// directory cannot be created.
    pub async fn default_location() -> Result<Self> {
        Self::new(AivaPaths::data_dir()?).await
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl LocalStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path).await {
            Ok(value) => {
                tracing::debug!(key, bytes = value.len(), "read store entry");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(key, "store entry absent");
                Ok(None)
            }
            Err(e) => Err(e).context(format!("Failed to read store entry: {path:?}")),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key);
        fs::write(&path, value)
            .await
            .context(format!("Failed to write store entry: {path:?}"))?;
        tracing::debug!(key, bytes = value.len(), "wrote store entry");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(key, "deleted store entry");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!("Failed to delete store entry: {path:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiva_core::conversation::MESSAGES_KEY;

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();

        store.set(MESSAGES_KEY, "[{\"id\":1}]").await.unwrap();
        assert_eq!(
            store.get(MESSAGES_KEY).await.unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
        assert!(dir.path().join("aiAssistant_messages.json").exists());
    }

    #[tokio::test]
    async fn test_absent_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();

        store.set("entry", "value").await.unwrap();
        store.remove("entry").await.unwrap();
        assert_eq!(store.get("entry").await.unwrap(), None);
        // Removing again is not an error.
        store.remove("entry").await.unwrap();
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();

        store.set("entry", "first").await.unwrap();
        store.set("entry", "second").await.unwrap();
        assert_eq!(store.get("entry").await.unwrap().as_deref(), Some("second"));
    }
}
