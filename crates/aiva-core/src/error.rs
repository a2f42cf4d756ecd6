//! Error types for the AIVA assistant core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the assistant core.
///
/// Nothing in the core is fatal: every variant degrades to a safe default
/// somewhere up the call chain. The typed variants exist so embedders can
/// distinguish a missing platform capability (shown to the user as a
/// notice) from storage trouble (logged and retried on the next write).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum AivaError {
    /// The platform lacks a capability the user asked for (e.g. speech
    /// recognition). Surfaced as a blocking notice, never a crash.
    #[error("Unsupported capability: {0}")]
    UnsupportedCapability(String),

    /// Persistence layer failure (read or write of the local store).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl AivaError {
    /// Creates an UnsupportedCapability error
    pub fn unsupported_capability(message: impl Into<String>) -> Self {
        Self::UnsupportedCapability(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Serialization error
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error is an UnsupportedCapability error.
    pub fn is_unsupported_capability(&self) -> bool {
        matches!(self, Self::UnsupportedCapability(_))
    }

    /// Returns true if this error is a Storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
