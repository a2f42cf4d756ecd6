//! The response-selection engine.
//!
//! Given raw user text, the current page section, and the knowledge base,
//! the engine produces exactly one reply. Matching is an ordered list of
//! `(predicate, handler)` rules evaluated first-match-wins over
//! case-insensitive substring containment, ending in fallbacks that make
//! the chain total: unmatched input is never an error.
//!
//! The engine is pure. The one permitted side effect, scrolling the page
//! to a named section, is returned as a requested [`UiAction`] for the
//! embedding UI to perform.

mod rules;

use crate::knowledge::KnowledgeBase;
use crate::section::Section;
use serde::{Deserialize, Serialize};

/// An effect the engine asks the embedding UI to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiAction {
    /// Scroll the page to the named section.
    ScrollToSection { section: Section },
    /// Open or download a named resource (e.g. the resume).
    OpenResource { url: String },
}

/// One reply from the engine: the text to show, plus an optional
/// requested UI effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub action: Option<UiAction>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }

    fn with_action(text: impl Into<String>, action: UiAction) -> Self {
        Self {
            text: text.into(),
            action: Some(action),
        }
    }
}

/// Everything a rule may look at when matching or replying.
pub(crate) struct MatchContext<'a> {
    /// The raw input, lowercased once up front.
    pub lower: String,
    pub section: Section,
    pub kb: &'a KnowledgeBase,
}

impl<'a> MatchContext<'a> {
    fn new(text: &str, section: Section, kb: &'a KnowledgeBase) -> Self {
        Self {
            lower: text.to_lowercase(),
            section,
            kb,
        }
    }

    /// True when the input contains any of the given needles.
    pub(crate) fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower.contains(n))
    }
}

/// Computes the reply for one user input.
///
/// Rules are evaluated in fixed priority order; the final fallbacks match
/// everything, so some reply text is always produced.
pub fn respond(text: &str, section: Section, kb: &KnowledgeBase) -> Reply {
    let ctx = MatchContext::new(text, section, kb);
    for rule in rules::RULES {
        if (rule.matches)(&ctx) {
            tracing::debug!(rule = rule.name, %section, "response rule matched");
            return (rule.respond)(&ctx);
        }
    }
    // The table ends in a catch-all; this is the same reply it gives.
    rules::generic_fallback(&ctx)
}
