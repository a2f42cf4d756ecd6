//! Voice capture seam.
//!
//! Speech recognition is a platform capability the core cannot assume.
//! The assistant drives a single-shot capture through this trait and the
//! embedding UI supplies whatever backend the platform has.

use crate::error::AivaError;
use async_trait::async_trait;

/// A single-shot speech-to-text capture source.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Runs one capture session to completion.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(transcript))`: recognition produced a transcript, to be
    ///   forwarded as if the user had typed it
    /// - `Ok(None)`: recognition errored or ended without a result; the
    ///   caller clears its listening state and appends nothing
    /// - `Err(AivaError::UnsupportedCapability)`: the platform has no
    ///   speech recognition at all; surfaced to the user as a notice
    async fn capture(&self) -> Result<Option<String>, AivaError>;
}

/// Recognizer for platforms without speech support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSpeechRecognizer;

#[async_trait]
impl SpeechRecognizer for UnsupportedSpeechRecognizer {
    async fn capture(&self) -> Result<Option<String>, AivaError> {
        Err(AivaError::unsupported_capability(
            "Speech recognition is not supported on this platform.",
        ))
    }
}
