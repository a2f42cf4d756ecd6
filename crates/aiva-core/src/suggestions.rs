//! Context-aware prompt suggestions.
//!
//! A fixed four-entry prompt list per page section, shown as tappable
//! chips under the input field. Static lookup, no randomness, no history
//! dependency: repeated calls for the same section return the same list.

use crate::section::Section;

/// Number of suggestions offered per section.
pub const SUGGESTION_COUNT: usize = 4;

/// Section-independent suggestions, for embedders with no section tracker.
pub const DEFAULT_SUGGESTIONS: [&str; SUGGESTION_COUNT] = [
    "Tell me about Shubham's projects",
    "What technologies does Shubham use?",
    "How can I contact Shubham?",
    "Download Shubham's resume",
];

const HERO: [&str; SUGGESTION_COUNT] = [
    "What can you do?",
    "Tell me about Shubham",
    "Show me Shubham's work",
    "What services does Shubham offer?",
];

const ABOUT: [&str; SUGGESTION_COUNT] = [
    "What are Shubham's skills?",
    "Download Shubham's resume",
    "Where has Shubham worked?",
    "Tell me more about Shubham's experience",
];

const SERVICES: [&str; SUGGESTION_COUNT] = [
    "Tell me more about AI integration",
    "How does Shubham approach full-stack development?",
    "What cloud platforms does Shubham work with?",
    "Does Shubham build mobile apps?",
];

const PROJECTS: [&str; SUGGESTION_COUNT] = [
    "Tell me about the AI e-commerce project",
    "Show me Shubham's best work",
    "What technologies were used in these projects?",
    "Are there any live demos I can see?",
];

const TESTIMONIALS: [&str; SUGGESTION_COUNT] = [
    "Who has Shubham worked with?",
    "What do clients say about Shubham?",
    "Does Shubham have any case studies?",
    "How can I provide feedback?",
];

const CONTACT: [&str; SUGGESTION_COUNT] = [
    "What's the best way to contact Shubham?",
    "Can I schedule a meeting with Shubham?",
    "What's Shubham's email address?",
    "Is Shubham available for freelance work?",
];

/// Returns the suggestion list for the given section.
///
/// Guaranteed deterministic and non-empty.
pub fn suggestions_for(section: Section) -> &'static [&'static str; SUGGESTION_COUNT] {
    match section {
        Section::Hero => &HERO,
        Section::About => &ABOUT,
        Section::Services => &SERVICES,
        Section::Projects => &PROJECTS,
        Section::Testimonials => &TESTIMONIALS,
        Section::Contact => &CONTACT,
    }
}
