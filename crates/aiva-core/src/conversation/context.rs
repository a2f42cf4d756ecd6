//! Rolling usage context, distinct from the message log.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many recent user inputs the context retains.
pub const RECENT_TOPIC_LIMIT: usize = 5;

/// Lightweight usage statistics updated on every user message.
///
/// Persisted separately from the message log and reset to its zero value
/// on a conversation clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    /// The last few user inputs, lowercased, oldest first.
    #[serde(default)]
    pub recent_topics: Vec<String>,
    /// Reserved for future personalization; currently always empty.
    #[serde(default)]
    pub user_preferences: HashMap<String, String>,
    /// Total user messages over the life of the conversation.
    /// Monotonically non-decreasing until a clear.
    #[serde(default)]
    pub interaction_count: u64,
}

impl ConversationContext {
    /// Records one user input: bumps the interaction count and pushes the
    /// lowercased text onto the recent-topic window.
    pub fn record_input(&mut self, text: &str) {
        self.interaction_count += 1;
        self.recent_topics.push(text.to_lowercase());
        let overflow = self.recent_topics.len().saturating_sub(RECENT_TOPIC_LIMIT);
        if overflow > 0 {
            self.recent_topics.drain(..overflow);
        }
    }
}
