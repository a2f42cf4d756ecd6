//! Knowledge base entity types.

use serde::{Deserialize, Serialize};

/// Proficiency level of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Intermediate,
    Advanced,
    Expert,
}

/// The portfolio owner: contact details, bio, and outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Short bio used by the about-section reply.
    pub bio: String,
    pub resume_url: String,
    pub calendly_url: String,
    pub whatsapp: String,
    pub linkedin: String,
    pub github: String,
}

/// A single skill with proficiency and years of experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub years: u8,
}

/// A portfolio project with its technology list and outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technologies in presentation order.
    pub technologies: Vec<String>,
    pub demo_url: String,
    pub repo_url: String,
}

/// A service offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

/// The complete read-only description of the portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub owner: Owner,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
}

impl KnowledgeBase {
    /// Finds the first project whose title appears (case-insensitively)
    /// in the given lowercased input.
    pub fn find_project_in(&self, lower_text: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| lower_text.contains(&p.title.to_lowercase()))
    }

    /// Project titles in presentation order.
    pub fn project_titles(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.title.as_str()).collect()
    }

    /// Names of skills at Expert or Advanced level.
    pub fn top_skill_names(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|s| matches!(s.level, SkillLevel::Expert | SkillLevel::Advanced))
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Service titles in presentation order.
    pub fn service_titles(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.title.as_str()).collect()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        super::default_knowledge_base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_project_is_case_insensitive() {
        let kb = KnowledgeBase::default();
        let title = kb.projects[0].title.to_lowercase();
        let found = kb
            .find_project_in(&format!("tell me about the {title} please"))
            .expect("project should match");
        assert_eq!(found.title, kb.projects[0].title);
    }

    #[test]
    fn test_top_skills_exclude_intermediate() {
        let kb = KnowledgeBase::default();
        let top = kb.top_skill_names();
        for skill in &kb.skills {
            let listed = top.contains(&skill.name.as_str());
            match skill.level {
                SkillLevel::Intermediate => assert!(!listed, "{} listed", skill.name),
                _ => assert!(listed, "{} missing", skill.name),
            }
        }
    }
}
