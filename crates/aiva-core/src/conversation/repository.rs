//! Local persistence trait.
//!
//! Defines the interface the conversation store persists through.

use anyhow::Result;
use async_trait::async_trait;

/// An abstract string key-value store, the analogue of browser-local
/// storage.
///
/// The store holds two independent entries (message log and conversation
/// context) under fixed keys. Absence of a key is "no saved state", not
/// an error. The conversation store is the only writer, so last-writer-
/// wins semantics are sufficient.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Reads the value under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: entry present
    /// - `Ok(None)`: no entry under this key
    /// - `Err(_)`: the backend failed
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous entry.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes the entry under `key`. Deleting a missing key is not an
    /// error.
    async fn remove(&self, key: &str) -> Result<()>;
}
