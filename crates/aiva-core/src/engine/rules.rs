//! The ordered rule table.
//!
//! Priority and fallback order live in one place, [`RULES`], so they are
//! explicit and independently testable. Earlier entries win; the last two
//! entries (section-contextual, then generic conversational) match every
//! input, which is what makes [`super::respond`] total.

use super::{MatchContext, Reply, UiAction};
use crate::section::Section;

/// One entry of the dispatch table: a named predicate/handler pair.
pub(super) struct Rule {
    pub name: &'static str,
    pub matches: fn(&MatchContext) -> bool,
    pub respond: fn(&MatchContext) -> Reply,
}

/// All rules, highest priority first.
pub(super) const RULES: &[Rule] = &[
    Rule {
        name: "navigation",
        matches: navigation_matches,
        respond: navigation_respond,
    },
    Rule {
        name: "resume",
        matches: resume_matches,
        respond: resume_respond,
    },
    Rule {
        name: "contact",
        matches: contact_matches,
        respond: contact_respond,
    },
    Rule {
        name: "scheduling",
        matches: scheduling_matches,
        respond: scheduling_respond,
    },
    Rule {
        name: "messaging",
        matches: messaging_matches,
        respond: messaging_respond,
    },
    Rule {
        name: "projects",
        matches: projects_matches,
        respond: projects_respond,
    },
    Rule {
        name: "technology",
        matches: technology_matches,
        respond: technology_respond,
    },
    Rule {
        name: "services",
        matches: services_matches,
        respond: services_respond,
    },
    Rule {
        name: "section_context",
        matches: match_always,
        respond: section_respond,
    },
    // Reachable only when the section-contextual entry above is removed,
    // kept so the table stays total on its own.
    Rule {
        name: "generic",
        matches: match_always,
        respond: generic_fallback,
    },
];

fn match_always(_ctx: &MatchContext) -> bool {
    true
}

// ---- navigation ------------------------------------------------------------

/// The section a navigation request targets, if any. `hero` is never a
/// target.
fn navigation_target(ctx: &MatchContext) -> Option<Section> {
    Section::navigable().find(|s| ctx.lower.contains(&s.to_string()))
}

fn navigation_matches(ctx: &MatchContext) -> bool {
    ctx.contains_any(&["scroll to", "go to", "show me"]) && navigation_target(ctx).is_some()
}

fn navigation_respond(ctx: &MatchContext) -> Reply {
    // The predicate ran first, so a target is present.
    let section = navigation_target(ctx).unwrap_or_default();
    Reply::with_action(
        format!("I'll take you to the {section} section right away!"),
        UiAction::ScrollToSection { section },
    )
}

// ---- resume ----------------------------------------------------------------

fn resume_matches(ctx: &MatchContext) -> bool {
    ctx.contains_any(&["resume", "cv"])
}

fn resume_respond(ctx: &MatchContext) -> Reply {
    Reply::text(format!(
        "You can download {}'s resume using the 'Download Resume' button in the About \
         section, or I can open it for you now. Would you like me to open it?",
        ctx.kb.owner.name
    ))
}

// ---- contact ---------------------------------------------------------------

fn contact_matches(ctx: &MatchContext) -> bool {
    ctx.contains_any(&["contact", "hire", "email"])
}

fn contact_respond(ctx: &MatchContext) -> Reply {
    Reply::text(format!(
        "You can contact {} through the contact form in the Contact section, or directly \
         via email at {}. Would you like me to scroll to the contact section?",
        ctx.kb.owner.name, ctx.kb.owner.email
    ))
}

// ---- scheduling ------------------------------------------------------------

fn scheduling_matches(ctx: &MatchContext) -> bool {
    ctx.contains_any(&["schedule", "meeting", "call"])
}

fn scheduling_respond(ctx: &MatchContext) -> Reply {
    Reply::text(format!(
        "{} uses Calendly for scheduling meetings. I can open his calendar for you to \
         book a time slot. Would you like me to do that?",
        ctx.kb.owner.name
    ))
}

// ---- messaging -------------------------------------------------------------

fn messaging_matches(ctx: &MatchContext) -> bool {
    ctx.contains_any(&["whatsapp", "message", "chat with"])
}

fn messaging_respond(ctx: &MatchContext) -> Reply {
    Reply::text(format!(
        "You can chat with {} on WhatsApp at {}. Would you like me to open WhatsApp \
         for you?",
        ctx.kb.owner.name, ctx.kb.owner.whatsapp
    ))
}

// ---- projects --------------------------------------------------------------

fn projects_matches(ctx: &MatchContext) -> bool {
    ctx.contains_any(&["project", "work", "portfolio"])
}

fn projects_respond(ctx: &MatchContext) -> Reply {
    if let Some(project) = ctx.kb.find_project_in(&ctx.lower) {
        return Reply::text(format!(
            "{}: {} It was built using {}. Would you like to see the demo or the code \
             repository?",
            project.title,
            project.description,
            project.technologies.join(", ")
        ));
    }

    Reply::text(format!(
        "{} has worked on several exciting projects including {}. Each project showcases \
         different skills and technologies. Which one would you like to know more about?",
        ctx.kb.owner.name,
        ctx.kb.project_titles().join(", ")
    ))
}

// ---- technology ------------------------------------------------------------

fn technology_matches(ctx: &MatchContext) -> bool {
    ctx.contains_any(&["tech", "stack", "technology", "skill"])
}

fn technology_respond(ctx: &MatchContext) -> Reply {
    Reply::text(format!(
        "{} is proficient in {}. He specializes in full-stack development with a focus \
         on AI integration. Is there a specific technology you'd like to know more about?",
        ctx.kb.owner.name,
        ctx.kb.top_skill_names().join(", ")
    ))
}

// ---- services --------------------------------------------------------------

fn services_matches(ctx: &MatchContext) -> bool {
    ctx.contains_any(&["service", "offer"])
}

fn services_respond(ctx: &MatchContext) -> Reply {
    Reply::text(format!(
        "{} offers services including {}. Each service is tailored to client needs. \
         Which service are you interested in learning more about?",
        ctx.kb.owner.name,
        ctx.kb.service_titles().join(", ")
    ))
}

// ---- section-contextual fallback -------------------------------------------

fn section_respond(ctx: &MatchContext) -> Reply {
    let owner = &ctx.kb.owner;
    let text = match ctx.section {
        Section::Hero => format!(
            "Welcome to {name}'s portfolio! I'm AIVA, his AI assistant. I can help you \
             explore his work, skills, and services. What would you like to know about?",
            name = owner.name
        ),
        Section::About => format!(
            "{name} is a {bio} Based in {location}, he's passionate about creating \
             innovative solutions. What specific aspect of his background interests you?",
            name = owner.name,
            bio = owner.bio,
            location = owner.location
        ),
        Section::Services => format!(
            "You're currently viewing {name}'s services. He offers expertise in \
             full-stack development, AI integration, cloud architecture, and mobile app \
             development. Which service interests you most?",
            name = owner.name
        ),
        Section::Projects => format!(
            "You're looking at {name}'s project portfolio. Each project demonstrates his \
             technical skills and problem-solving abilities. Would you like details about \
             a specific project?",
            name = owner.name
        ),
        Section::Testimonials => format!(
            "These testimonials reflect the quality of {name}'s work and client \
             satisfaction. His collaborative approach and technical expertise are \
             consistently praised. Would you like to know more about his work process?",
            name = owner.name
        ),
        Section::Contact => format!(
            "Ready to reach out? You can use this contact form, email directly at \
             {email}, or schedule a call. What's your preferred method of communication?",
            email = owner.email
        ),
    };
    Reply::text(text)
}

// ---- generic conversational fallback ---------------------------------------

pub(super) fn generic_fallback(ctx: &MatchContext) -> Reply {
    let name = &ctx.kb.owner.name;
    let text = if ctx.contains_any(&["hello", "hi", "hey"]) {
        format!("Hello there! I'm AIVA, {name}'s AI assistant. How can I help you today?")
    } else if ctx.lower.contains("thank") {
        format!(
            "You're welcome! Is there anything else you'd like to know about {name} or \
             his work?"
        )
    } else if ctx.contains_any(&["bye", "goodbye"]) {
        format!(
            "Thanks for chatting! Feel free to reach out if you have more questions \
             about {name}'s work."
        )
    } else {
        format!(
            "I'm here to help you learn more about {name} and his work. Feel free to ask \
             about his projects, skills, services, or how to get in touch!"
        )
    };
    Reply::text(text)
}
