//! Wire models for the backend REST surface.
//!
//! Read payloads arrive in snake_case exactly as the backend stores them; the
//! write surface speaks camelCase (see [`crate::payload`]). The backend is
//! the single authority for every field here: ids and timestamps are
//! server-assigned and the client treats each list as a cache.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use store::session::AdminUser;

/// Publication state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Draft,
        ProjectStatus::Published,
        ProjectStatus::Archived,
    ];

    /// Wire/value form, e.g. `"PUBLISHED"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "DRAFT",
            ProjectStatus::Published => "PUBLISHED",
            ProjectStatus::Archived => "ARCHIVED",
        }
    }

    /// Human form for select options, e.g. `"Published"`.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Published => "Published",
            ProjectStatus::Archived => "Archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DRAFT" => Some(ProjectStatus::Draft),
            "PUBLISHED" => Some(ProjectStatus::Published),
            "ARCHIVED" => Some(ProjectStatus::Archived),
            _ => None,
        }
    }
}

/// A portfolio project as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Project {
    pub fn is_published(&self) -> bool {
        self.status == ProjectStatus::Published
    }
}

/// Grouping bucket for skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    AiAgentic,
    Tools,
    Database,
    Devops,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::AiAgentic,
        SkillCategory::Tools,
        SkillCategory::Database,
        SkillCategory::Devops,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "FRONTEND",
            SkillCategory::Backend => "BACKEND",
            SkillCategory::AiAgentic => "AI_AGENTIC",
            SkillCategory::Tools => "TOOLS",
            SkillCategory::Database => "DATABASE",
            SkillCategory::Devops => "DEVOPS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::AiAgentic => "AI / Agentic",
            SkillCategory::Tools => "Tools",
            SkillCategory::Database => "Database",
            SkillCategory::Devops => "DevOps",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FRONTEND" => Some(SkillCategory::Frontend),
            "BACKEND" => Some(SkillCategory::Backend),
            "AI_AGENTIC" => Some(SkillCategory::AiAgentic),
            "TOOLS" => Some(SkillCategory::Tools),
            "DATABASE" => Some(SkillCategory::Database),
            "DEVOPS" => Some(SkillCategory::Devops),
            _ => None,
        }
    }
}

/// A technical skill with a 0..=100 proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub category: SkillCategory,
    pub icon: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// `GET /api/skills` returns both shapes; the client reads the flat list and
/// leaves the grouped map to the backend's other consumers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillsPayload {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub grouped: BTreeMap<String, Vec<Skill>>,
}

/// A contact-form message. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Aggregate counters for the dashboard overview. Missing fields read as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub projects: u64,
    #[serde(default)]
    pub skills: u64,
    #[serde(default)]
    pub contacts: u64,
    #[serde(default)]
    pub analytics: u64,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: AdminUser,
}

/// Result of the email-service probe, shown on the dashboard status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailServiceStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserializes_snake_case() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": "p1",
                "name": "Demo",
                "description": "A demo",
                "tech_stack": ["React", "Rust"],
                "status": "PUBLISHED",
                "github_url": "https://github.com/x/demo",
                "live_url": null,
                "image": null,
                "featured": true,
                "order_index": 2,
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-02T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(project.is_published());
        assert_eq!(project.tech_stack, vec!["React", "Rust"]);
        assert_eq!(project.github_url.as_deref(), Some("https://github.com/x/demo"));
        assert!(project.live_url.is_none());
    }

    #[test]
    fn test_skill_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&SkillCategory::AiAgentic).unwrap(),
            r#""AI_AGENTIC""#
        );
        for category in SkillCategory::ALL {
            assert_eq!(SkillCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_skills_payload_reads_flat_list() {
        let payload: SkillsPayload = serde_json::from_str(
            r#"{"skills":[{"id":"s1","name":"Rust","level":90,"category":"BACKEND",
                "icon":null,"color":null,"order_index":0,"visible":true}],
                "grouped":{"BACKEND":[]}}"#,
        )
        .unwrap();
        assert_eq!(payload.skills.len(), 1);
        assert_eq!(payload.skills[0].name, "Rust");
        assert!(payload.skills[0].visible);
    }

    #[test]
    fn test_dashboard_stats_missing_fields_default_to_zero() {
        let stats: DashboardStats = serde_json::from_str(r#"{"projects":3}"#).unwrap();
        assert_eq!(stats.projects, 3);
        assert_eq!(stats.analytics, 0);
    }
}
