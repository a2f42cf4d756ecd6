//! Conversation message types.

use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed (or voice-transcribed) by the visitor.
    User,
    /// Message produced by the response engine.
    Assistant,
}

/// A single message in the conversation log.
///
/// Immutable once created: the store appends messages and only ever
/// removes them through a full-log clear. Ids are unique and strictly
/// increasing within one conversation, so log order equals creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Creation time as an ISO-8601 string.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_round_trips_through_json() {
        let message = Message {
            id: 7,
            text: "Tell me about your projects".to_string(),
            sender: Sender::User,
            timestamp: "2024-05-01T12:00:00+00:00".to_string(),
        };
        let json = serde_json::to_string(&message).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Sender::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
