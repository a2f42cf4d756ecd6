//! Conversation domain module.
//!
//! Owns the ordered message log and the lightweight usage context, with
//! load/save through an injected key-value store.
//!
//! # Module Structure
//!
//! - `message`: Message types (`Message`, `Sender`)
//! - `context`: Rolling usage context (`ConversationContext`)
//! - `repository`: The `LocalStore` persistence trait
//! - `store`: The `ConversationStore` itself

mod context;
mod message;
mod repository;
mod store;

pub use context::{ConversationContext, RECENT_TOPIC_LIMIT};
pub use message::{Message, Sender};
pub use repository::LocalStore;
pub use store::{ConversationStore, CONTEXT_KEY, MESSAGES_KEY};
