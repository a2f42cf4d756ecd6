//! The default portfolio data set.
//!
//! In a hosted deployment this would come from a CMS; the assistant only
//! ever reads it, so a built-in preset keeps the engine self-contained.

use super::model::{KnowledgeBase, Owner, Project, Service, Skill, SkillLevel};

/// Builds the default knowledge base describing the portfolio owner.
pub fn default_knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        owner: Owner {
            name: "Shubham".to_string(),
            email: "shubham@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            bio: "Full-stack developer with expertise in React, Node.js, and AI integration."
                .to_string(),
            resume_url: "/resume.pdf".to_string(),
            calendly_url: "https://calendly.com/shubham/30min".to_string(),
            whatsapp: "+1 (555) 123-4567".to_string(),
            linkedin: "https://linkedin.com/in/shubham".to_string(),
            github: "https://github.com/shubham".to_string(),
        },
        skills: vec![
            skill("React", SkillLevel::Expert, 4),
            skill("Node.js", SkillLevel::Advanced, 3),
            skill("Python", SkillLevel::Advanced, 5),
            skill("TensorFlow", SkillLevel::Intermediate, 2),
            skill("AWS", SkillLevel::Advanced, 3),
            skill("MongoDB", SkillLevel::Advanced, 4),
            skill("GraphQL", SkillLevel::Intermediate, 2),
            skill("Docker", SkillLevel::Intermediate, 3),
        ],
        projects: vec![
            Project {
                title: "AI-Powered E-commerce Platform".to_string(),
                description: "Built a full-stack e-commerce platform with AI-driven product \
                              recommendations and customer support."
                    .to_string(),
                technologies: strings(&["React", "Node.js", "MongoDB", "TensorFlow", "AWS"]),
                demo_url: "https://ai-ecommerce.example.com".to_string(),
                repo_url: "https://github.com/shubham/ai-ecommerce".to_string(),
            },
            Project {
                title: "Smart Home Automation System".to_string(),
                description: "Developed an IoT-based smart home system with voice control and \
                              energy optimization."
                    .to_string(),
                technologies: strings(&[
                    "Python",
                    "TensorFlow",
                    "React Native",
                    "AWS IoT",
                    "MongoDB",
                ]),
                demo_url: "https://smarthome.example.com".to_string(),
                repo_url: "https://github.com/shubham/smart-home".to_string(),
            },
            Project {
                title: "Financial Analytics Dashboard".to_string(),
                description: "Created a real-time financial analytics dashboard with predictive \
                              modeling capabilities."
                    .to_string(),
                technologies: strings(&["React", "D3.js", "Node.js", "Python", "PostgreSQL"]),
                demo_url: "https://finance-analytics.example.com".to_string(),
                repo_url: "https://github.com/shubham/finance-analytics".to_string(),
            },
        ],
        services: vec![
            service(
                "Full-Stack Development",
                "End-to-end web application development with modern technologies.",
            ),
            service(
                "AI Integration",
                "Integrate AI capabilities into your existing applications.",
            ),
            service(
                "Cloud Architecture",
                "Design and implement scalable cloud solutions.",
            ),
            service(
                "Mobile App Development",
                "Cross-platform mobile applications with React Native.",
            ),
        ],
    }
}

fn skill(name: &str, level: SkillLevel, years: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        years,
    }
}

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
