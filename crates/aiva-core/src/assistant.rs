//! The assistant session facade.
//!
//! One `Assistant` wires the conversation store, the response engine, the
//! section tracker, and the voice seam into the surface the embedding UI
//! talks to: forward text in, read the reactive message log and flags
//! back out, and perform any [`UiAction`] arriving on the side channel.

use crate::clock::{Clock, ResponseDelay};
use crate::conversation::{ConversationContext, ConversationStore, LocalStore, Message, Sender};
use crate::engine::{respond, UiAction};
use crate::knowledge::KnowledgeBase;
use crate::section::{current_section, Section};
use crate::suggestions::{suggestions_for, SUGGESTION_COUNT};
use crate::voice::SpeechRecognizer;
use anyhow::Result;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pause before the typing indicator comes up for the welcome message.
const PRE_TYPING_PAUSE: Duration = Duration::from_millis(500);
/// Typing time for the welcome message.
const WELCOME_TYPING_PAUSE: Duration = Duration::from_millis(1000);
/// Reply latency bounds: 1 s plus up to 1 s of jitter.
const REPLY_LATENCY_BASE_MS: u64 = 1000;
const REPLY_LATENCY_JITTER_MS: u64 = 1000;

/// The conversational assistant for one visitor.
///
/// All methods take `&mut self`, so replies are strictly serialized: the
/// randomized typing delay is awaited inline and no second reply can be
/// scheduled for the same conversation while one is pending. A pending
/// reply is never cancelled; closing the chat panel only hides the log,
/// and the reply still lands when the timer fires.
pub struct Assistant {
    kb: KnowledgeBase,
    store: ConversationStore,
    delay: Arc<dyn ResponseDelay>,
    recognizer: Arc<dyn SpeechRecognizer>,
    actions: mpsc::UnboundedSender<UiAction>,
    current_section: Section,
    is_open: bool,
    is_typing: bool,
    listening: bool,
}

impl Assistant {
    /// Creates an assistant over the given collaborators.
    ///
    /// Returns the assistant and the receiving end of the UI-action side
    /// channel; the embedding UI drains it and performs the requests.
    pub fn new(
        kb: KnowledgeBase,
        local_store: Arc<dyn LocalStore>,
        clock: Arc<dyn Clock>,
        delay: Arc<dyn ResponseDelay>,
        recognizer: Arc<dyn SpeechRecognizer>,
    ) -> (Self, mpsc::UnboundedReceiver<UiAction>) {
        let (actions, action_rx) = mpsc::unbounded_channel();
        let assistant = Self {
            kb,
            store: ConversationStore::new(local_store, clock),
            delay,
            recognizer,
            actions,
            current_section: Section::default(),
            is_open: false,
            is_typing: false,
            listening: false,
        };
        (assistant, action_rx)
    }

    /// Loads any saved conversation; when none exists, plays the one-time
    /// welcome message.
    pub async fn initialize(&mut self) -> Result<()> {
        let had_log = self.store.load().await?;
        if !had_log {
            self.play_welcome().await?;
        }
        Ok(())
    }

    /// Forwards one user input and produces the assistant's reply.
    ///
    /// Blank input is ignored. The reply goes through the injected delay
    /// to simulate typing latency; any requested UI effect is sent on the
    /// side channel just before the reply is appended.
    pub async fn send_message(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        self.store.append(Sender::User, text).await?;
        self.is_typing = true;

        self.delay.pause(self.reply_latency()).await;

        let reply = respond(text, self.current_section, &self.kb);
        if let Some(action) = reply.action {
            self.request_action(action);
        }
        self.store.append(Sender::Assistant, reply.text).await?;
        self.is_typing = false;
        Ok(())
    }

    /// Shows or hides the chat panel. Opening an empty conversation plays
    /// the welcome message.
    pub async fn toggle_chat(&mut self) -> Result<bool> {
        self.is_open = !self.is_open;
        if self.is_open && self.store.is_empty() {
            self.play_welcome().await?;
        }
        Ok(self.is_open)
    }

    /// Toggles a single-shot voice capture.
    ///
    /// Invoking while a capture is active cancels it. A transcript is
    /// forwarded as if typed; a capture that ends without a result only
    /// clears the listening flag. An unsupported platform surfaces
    /// [`AivaError::UnsupportedCapability`](crate::AivaError) for the UI
    /// to show as a notice.
    pub async fn handle_voice_input(&mut self) -> Result<()> {
        if self.listening {
            self.listening = false;
            return Ok(());
        }

        self.listening = true;
        match self.recognizer.capture().await {
            Ok(Some(transcript)) => {
                self.listening = false;
                self.send_message(&transcript).await
            }
            Ok(None) => {
                self.listening = false;
                Ok(())
            }
            Err(error) => {
                self.listening = false;
                Err(error.into())
            }
        }
    }

    /// Clears the conversation (log, context, and both persisted
    /// entries), then replays the welcome message.
    pub async fn clear_conversation(&mut self) -> Result<()> {
        self.store.clear().await?;
        self.play_welcome().await
    }

    /// Re-runs the section tracker for a new scroll position.
    ///
    /// # Returns
    ///
    /// `true` when the current section changed, so the embedder can
    /// suppress redundant re-renders.
    pub fn update_scroll(
        &mut self,
        scroll_position: f64,
        viewport_height: f64,
        offsets: &[(Section, f64)],
    ) -> bool {
        let section = current_section(scroll_position, viewport_height, offsets);
        if section != self.current_section {
            self.current_section = section;
            true
        } else {
            false
        }
    }

    /// Sets the current section directly, for embedders that track
    /// visibility themselves.
    pub fn set_section(&mut self, section: Section) {
        self.current_section = section;
    }

    /// Asks the UI to open the owner's resume.
    pub fn request_resume(&self) {
        self.request_action(UiAction::OpenResource {
            url: self.kb.owner.resume_url.clone(),
        });
    }

    /// Prompt suggestions for the current section.
    pub fn suggestions(&self) -> &'static [&'static str; SUGGESTION_COUNT] {
        suggestions_for(self.current_section)
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn context(&self) -> &ConversationContext {
        self.store.context()
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    async fn play_welcome(&mut self) -> Result<()> {
        self.delay.pause(PRE_TYPING_PAUSE).await;
        self.is_typing = true;
        self.delay.pause(WELCOME_TYPING_PAUSE).await;
        let greeting = format!(
            "Hi! I'm AIVA — {}'s smart assistant. Need help exploring his work?",
            self.kb.owner.name
        );
        self.store.append(Sender::Assistant, greeting).await?;
        self.is_typing = false;
        Ok(())
    }

    fn reply_latency(&self) -> Duration {
        let jitter = rand::thread_rng().gen_range(0..=REPLY_LATENCY_JITTER_MS);
        Duration::from_millis(REPLY_LATENCY_BASE_MS + jitter)
    }

    fn request_action(&self, action: UiAction) {
        // The embedder may have dropped the receiver; the reply text
        // stands on its own in that case.
        if self.actions.send(action).is_err() {
            tracing::debug!("UI action channel closed, dropping request");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use crate::error::AivaError;
    use crate::knowledge::default_knowledge_base;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStore {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl LocalStore for MockStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        }
    }

    // Delay double that records each requested pause instead of waiting.
    #[derive(Default)]
    struct RecordingDelay {
        pauses: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl ResponseDelay for RecordingDelay {
        async fn pause(&self, duration: Duration) {
            self.pauses.lock().unwrap().push(duration);
        }
    }

    enum MockCapture {
        Transcript(&'static str),
        NoResult,
        Unsupported,
    }

    #[async_trait]
    impl SpeechRecognizer for MockCapture {
        async fn capture(&self) -> Result<Option<String>, AivaError> {
            match self {
                MockCapture::Transcript(text) => Ok(Some(text.to_string())),
                MockCapture::NoResult => Ok(None),
                MockCapture::Unsupported => Err(AivaError::unsupported_capability(
                    "no speech recognition",
                )),
            }
        }
    }

    fn assistant_with(
        backing: Arc<MockStore>,
        recognizer: Arc<dyn SpeechRecognizer>,
    ) -> (Assistant, mpsc::UnboundedReceiver<UiAction>) {
        Assistant::new(
            default_knowledge_base(),
            backing,
            Arc::new(FixedClock),
            Arc::new(RecordingDelay::default()),
            recognizer,
        )
    }

    fn fresh_assistant() -> (Assistant, mpsc::UnboundedReceiver<UiAction>) {
        assistant_with(
            Arc::new(MockStore::default()),
            Arc::new(MockCapture::NoResult),
        )
    }

    #[tokio::test]
    async fn test_initialize_plays_welcome_once() {
        let backing = Arc::new(MockStore::default());
        let (mut assistant, _rx) =
            assistant_with(backing.clone(), Arc::new(MockCapture::NoResult));
        assistant.initialize().await.unwrap();

        assert_eq!(assistant.messages().len(), 1);
        assert_eq!(assistant.messages()[0].sender, Sender::Assistant);
        assert!(assistant.messages()[0].text.contains("AIVA"));

        // A saved log suppresses the welcome on the next startup.
        let (mut second, _rx) = assistant_with(backing, Arc::new(MockCapture::NoResult));
        second.initialize().await.unwrap();
        assert_eq!(second.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_welcome_sequence_uses_the_documented_pauses() {
        let delay = Arc::new(RecordingDelay::default());
        let (mut assistant, _rx) = Assistant::new(
            default_knowledge_base(),
            Arc::new(MockStore::default()),
            Arc::new(FixedClock),
            delay.clone(),
            Arc::new(MockCapture::NoResult),
        );
        assistant.initialize().await.unwrap();

        let pauses = delay.pauses.lock().unwrap().clone();
        assert_eq!(
            pauses,
            [Duration::from_millis(500), Duration::from_millis(1000)]
        );
    }

    #[tokio::test]
    async fn test_send_message_appends_user_then_reply() {
        let (mut assistant, _rx) = fresh_assistant();
        assistant.send_message("what services do you offer?").await.unwrap();

        let log = assistant.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].sender, Sender::User);
        assert_eq!(log[1].sender, Sender::Assistant);
        assert!(log[0].id < log[1].id);
        assert!(!assistant.is_typing());
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let (mut assistant, _rx) = fresh_assistant();
        assistant.send_message("   ").await.unwrap();
        assert!(assistant.messages().is_empty());
    }

    #[tokio::test]
    async fn test_navigation_reaches_the_action_channel() {
        let (mut assistant, mut rx) = fresh_assistant();
        assistant.send_message("scroll to contact please").await.unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            UiAction::ScrollToSection {
                section: Section::Contact
            }
        );
    }

    #[tokio::test]
    async fn test_reply_lands_even_while_panel_is_closed() {
        let (mut assistant, _rx) = fresh_assistant();
        assert!(!assistant.is_open());
        assistant.send_message("hello").await.unwrap();
        assert_eq!(assistant.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_chat_welcomes_on_first_open() {
        let (mut assistant, _rx) = fresh_assistant();
        assert!(assistant.toggle_chat().await.unwrap());
        assert_eq!(assistant.messages().len(), 1);

        // Closing and reopening does not repeat the welcome.
        assert!(!assistant.toggle_chat().await.unwrap());
        assert!(assistant.toggle_chat().await.unwrap());
        assert_eq!(assistant.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_resets_and_replays_welcome() {
        let (mut assistant, _rx) = fresh_assistant();
        assistant.send_message("hi there").await.unwrap();
        assistant.clear_conversation().await.unwrap();

        let log = assistant.messages();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].id, 1);
        assert_eq!(assistant.context().interaction_count, 0);
    }

    #[tokio::test]
    async fn test_voice_transcript_is_forwarded_as_text() {
        let (mut assistant, _rx) = assistant_with(
            Arc::new(MockStore::default()),
            Arc::new(MockCapture::Transcript("show me your portfolio")),
        );
        assistant.handle_voice_input().await.unwrap();

        let log = assistant.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].text, "show me your portfolio");
        assert!(!assistant.is_listening());
    }

    #[tokio::test]
    async fn test_failed_capture_clears_listening_without_a_message() {
        let (mut assistant, _rx) = fresh_assistant();
        assistant.handle_voice_input().await.unwrap();
        assert!(assistant.messages().is_empty());
        assert!(!assistant.is_listening());
    }

    #[tokio::test]
    async fn test_unsupported_voice_surfaces_capability_error() {
        let (mut assistant, _rx) = assistant_with(
            Arc::new(MockStore::default()),
            Arc::new(MockCapture::Unsupported),
        );
        let err = assistant.handle_voice_input().await.unwrap_err();
        let err = err.downcast_ref::<AivaError>().expect("typed error");
        assert!(err.is_unsupported_capability());
        assert!(!assistant.is_listening());
        assert!(assistant.messages().is_empty());
    }

    #[tokio::test]
    async fn test_update_scroll_reports_changes_only() {
        let offsets = [
            (Section::Hero, 0.0),
            (Section::About, 500.0),
            (Section::Services, 1200.0),
        ];
        let (mut assistant, _rx) = fresh_assistant();

        assert_eq!(assistant.current_section(), Section::Hero);
        assert!(assistant.update_scroll(250.0, 900.0, &offsets));
        assert_eq!(assistant.current_section(), Section::About);
        // Same probe result again: no change reported.
        assert!(!assistant.update_scroll(260.0, 900.0, &offsets));
    }

    #[tokio::test]
    async fn test_suggestions_follow_the_current_section() {
        let (mut assistant, _rx) = fresh_assistant();
        assistant.set_section(Section::Projects);
        assert_eq!(assistant.suggestions(), suggestions_for(Section::Projects));
        assert_eq!(assistant.suggestions().len(), SUGGESTION_COUNT);
    }

    #[tokio::test]
    async fn test_request_resume_uses_the_side_channel() {
        let (assistant, mut rx) = fresh_assistant();
        assistant.request_resume();
        match rx.try_recv().unwrap() {
            UiAction::OpenResource { url } => assert_eq!(url, "/resume.pdf"),
            other => panic!("unexpected action {other:?}"),
        }
    }
}
