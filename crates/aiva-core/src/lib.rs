//! AIVA core: the response-selection engine and conversation state for a
//! portfolio site's floating assistant.
//!
//! The crate is UI-agnostic. An embedding front-end forwards user text
//! (typed or voice-transcribed), reports the visible page section, renders
//! the message log and suggestion list, and performs the UI actions the
//! engine requests on its side channel. Everything here runs without a
//! browser: persistence, timestamps, delays, and voice capture are traits
//! injected at construction.

pub mod assistant;
pub mod clock;
pub mod conversation;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod section;
pub mod suggestions;
pub mod voice;

// Re-export common error type
pub use error::AivaError;

pub use assistant::Assistant;
pub use clock::{Clock, ResponseDelay, SystemClock, TimerDelay};
pub use conversation::{ConversationContext, ConversationStore, LocalStore, Message, Sender};
pub use engine::{respond, Reply, UiAction};
pub use knowledge::{knowledge_base, KnowledgeBase};
pub use section::{current_section, Section};
pub use suggestions::{suggestions_for, DEFAULT_SUGGESTIONS, SUGGESTION_COUNT};
pub use voice::{SpeechRecognizer, UnsupportedSpeechRecognizer};
