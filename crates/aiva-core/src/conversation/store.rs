//! The conversation store.

use super::context::ConversationContext;
use super::message::{Message, Sender};
use super::repository::LocalStore;
use crate::clock::Clock;
use crate::error::AivaError;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Persisted key for the serialized message log.
pub const MESSAGES_KEY: &str = "aiAssistant_messages";
/// Persisted key for the serialized conversation context.
pub const CONTEXT_KEY: &str = "aiAssistant_context";

/// Owns the ordered message log and the usage context.
///
/// Persistence and timestamps are injected, so the store is fully
/// deterministic under test. Every mutation persists before returning;
/// appends happen in strict call order and ids are unique and strictly
/// increasing until a [`clear`](Self::clear).
pub struct ConversationStore {
    store: Arc<dyn LocalStore>,
    clock: Arc<dyn Clock>,
    messages: Vec<Message>,
    context: ConversationContext,
    next_id: u64,
}

impl ConversationStore {
    pub fn new(store: Arc<dyn LocalStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            messages: Vec::new(),
            context: ConversationContext::default(),
            next_id: 1,
        }
    }

    /// Loads the message log and context from the local store.
    ///
    /// A missing entry means no saved state. A corrupt entry is discarded
    /// with a warning and treated as absent; loading never fails the UI
    /// over bad saved data.
    ///
    /// # Returns
    ///
    /// `true` when a usable saved message log existed. The caller uses
    /// this to decide whether to schedule the one-time welcome message.
    pub async fn load(&mut self) -> Result<bool> {
        let mut had_log = false;

        if let Some(raw) = self
            .store
            .get(MESSAGES_KEY)
            .await
            .map_err(|e| AivaError::storage(e.to_string()))
            .context("Failed to read saved message log")?
        {
            match serde_json::from_str::<Vec<Message>>(&raw) {
                Ok(messages) => {
                    self.next_id = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
                    self.messages = messages;
                    had_log = true;
                }
                Err(error) => {
                    tracing::warn!(%error, "discarding unparsable saved message log");
                }
            }
        }

        if let Some(raw) = self
            .store
            .get(CONTEXT_KEY)
            .await
            .map_err(|e| AivaError::storage(e.to_string()))
            .context("Failed to read saved conversation context")?
        {
            match serde_json::from_str::<ConversationContext>(&raw) {
                Ok(context) => self.context = context,
                Err(error) => {
                    tracing::warn!(%error, "discarding unparsable saved conversation context");
                }
            }
        }

        Ok(had_log)
    }

    /// Appends one message and persists the log.
    ///
    /// User messages also update the conversation context (interaction
    /// count, recent topics) and persist it.
    pub async fn append(&mut self, sender: Sender, text: impl Into<String>) -> Result<Message> {
        let message = Message {
            id: self.next_id,
            text: text.into(),
            sender,
            timestamp: self.clock.now_iso8601(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        self.persist_messages().await?;

        if sender == Sender::User {
            self.context.record_input(&message.text);
            self.persist_context().await?;
        }

        Ok(message)
    }

    /// Empties the log, zeroes the context, and deletes both persisted
    /// entries.
    pub async fn clear(&mut self) -> Result<()> {
        self.messages.clear();
        self.context = ConversationContext::default();
        self.next_id = 1;
        self.store
            .remove(MESSAGES_KEY)
            .await
            .map_err(|e| AivaError::storage(e.to_string()))
            .context("Failed to delete saved message log")?;
        self.store
            .remove(CONTEXT_KEY)
            .await
            .map_err(|e| AivaError::storage(e.to_string()))
            .context("Failed to delete saved conversation context")?;
        Ok(())
    }

    /// The message log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    async fn persist_messages(&self) -> Result<()> {
        let json = serde_json::to_string(&self.messages)
            .map_err(|e| AivaError::serialization("JSON", e.to_string()))
            .context("Failed to serialize message log")?;
        self.store
            .set(MESSAGES_KEY, &json)
            .await
            .map_err(|e| AivaError::storage(e.to_string()))
            .context("Failed to write message log")
    }

    async fn persist_context(&self) -> Result<()> {
        let json = serde_json::to_string(&self.context)
            .map_err(|e| AivaError::serialization("JSON", e.to_string()))
            .context("Failed to serialize conversation context")?;
        self.store
            .set(CONTEXT_KEY, &json)
            .await
            .map_err(|e| AivaError::storage(e.to_string()))
            .context("Failed to write conversation context")
    }
}
