//! Page sections and the scroll-position tracker.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// One of the fixed named regions of the single-page layout.
///
/// Exactly one section is "current" at any time; `Hero` is the default
/// when nothing is registered or on initial load. The lowercase string
/// forms double as the names matched by navigation requests.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Services,
    Projects,
    Testimonials,
    Contact,
}

impl Default for Section {
    fn default() -> Self {
        Section::Hero
    }
}

impl Section {
    /// All sections in document order.
    pub fn all() -> impl Iterator<Item = Section> {
        Section::iter()
    }

    /// Sections a navigation request may target, in document order.
    /// `Hero` is excluded: it is the landing region, not a destination.
    pub fn navigable() -> impl Iterator<Item = Section> {
        Section::iter().filter(|s| *s != Section::Hero)
    }
}

/// Maps a scroll position to the currently visible section.
///
/// The probe line sits a third of the viewport below the scroll offset.
/// Among the registered sections (in document order) whose top offset has
/// scrolled past the probe, the last one wins; when none qualify, or when
/// no sections are registered at all, the tracker falls back to `Hero`.
///
/// Pure function of its inputs; the embedding UI subscribes to scroll
/// events, re-invokes it, and suppresses redundant updates itself.
pub fn current_section(
    scroll_position: f64,
    viewport_height: f64,
    offsets: &[(Section, f64)],
) -> Section {
    let probe = scroll_position + viewport_height / 3.0;
    for (section, top) in offsets.iter().rev() {
        if *top <= probe {
            return *section;
        }
    }
    Section::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_section_string_forms() {
        assert_eq!(Section::Projects.to_string(), "projects");
        assert_eq!(Section::from_str("contact").unwrap(), Section::Contact);
        assert!(Section::from_str("footer").is_err());
    }

    #[test]
    fn test_navigable_excludes_hero() {
        let targets: Vec<Section> = Section::navigable().collect();
        assert_eq!(targets.len(), 5);
        assert!(!targets.contains(&Section::Hero));
        assert_eq!(Section::all().count(), 6);
    }

    #[test]
    fn test_probe_selects_last_passed_section() {
        let offsets = [(Section::About, 500.0), (Section::Services, 1200.0)];
        // probe = 250 + 900/3 = 550, past about but not services
        assert_eq!(current_section(250.0, 900.0, &offsets), Section::About);
        // probe = 1000 + 300 = 1300, past both
        assert_eq!(current_section(1000.0, 900.0, &offsets), Section::Services);
    }

    #[test]
    fn test_probe_before_every_offset_returns_hero() {
        let offsets = [(Section::About, 500.0), (Section::Services, 1200.0)];
        // probe = 0 + 300 = 300, before every registered offset
        assert_eq!(current_section(0.0, 900.0, &offsets), Section::Hero);
    }

    #[test]
    fn test_no_registered_sections_returns_hero() {
        assert_eq!(current_section(4000.0, 900.0, &[]), Section::Hero);
    }

    #[test]
    fn test_exact_offset_boundary_qualifies() {
        let offsets = [(Section::Hero, 0.0), (Section::About, 600.0)];
        // probe lands exactly on the about offset
        assert_eq!(current_section(300.0, 900.0, &offsets), Section::About);
    }
}
