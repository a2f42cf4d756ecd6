//! Persistence backends for the AIVA assistant core.
//!
//! Implements the core's `LocalStore` trait: a JSON file-per-key store
//! for real runs and an in-memory store for tests and ephemeral sessions.

pub mod json_file_store;
pub mod memory_store;
pub mod paths;

pub use crate::json_file_store::JsonFileStore;
pub use crate::memory_store::MemoryStore;
