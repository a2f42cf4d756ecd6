//! Portfolio knowledge base.
//!
//! Static, read-only facts about the portfolio owner that the response
//! engine draws replies from. Loaded once at process start, never mutated.
//!
//! # Module Structure
//!
//! - `model`: Knowledge base entity types (`Owner`, `Skill`, `Project`, `Service`)
//! - `preset`: The default portfolio data set

mod model;
mod preset;

pub use model::{KnowledgeBase, Owner, Project, Service, Skill, SkillLevel};
pub use preset::default_knowledge_base;

use std::sync::OnceLock;

/// Static storage for the process-wide knowledge base (initialized once).
static KNOWLEDGE_BASE: OnceLock<KnowledgeBase> = OnceLock::new();

/// Returns a reference to the process-wide default knowledge base.
///
/// Initialized on first access and cached for subsequent calls. Code that
/// needs fixture data injects its own [`KnowledgeBase`] instead.
pub fn knowledge_base() -> &'static KnowledgeBase {
    KNOWLEDGE_BASE.get_or_init(default_knowledge_base)
}
