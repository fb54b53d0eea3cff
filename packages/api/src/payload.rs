//! Write-side payloads and the client-side checks applied before submission.
//!
//! The backend's write surface speaks camelCase (`techStack`, `githubUrl`),
//! unlike its snake_case reads. Optional URL fields are omitted from the body
//! entirely when blank rather than sent as empty strings.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{ProjectStatus, SkillCategory};

/// Split a comma-separated tech-stack field: trim each entry, drop empties.
pub fn split_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank-or-whitespace form fields become `None` so serialization skips them.
pub fn blank_to_none(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A project draft as submitted by the create/edit form. Server-assigned
/// fields (id, timestamps) are absent; the server's response is what lands in
/// the local list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub featured: bool,
    pub order: i64,
}

/// A skill draft as submitted by the create/edit form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub order: i64,
    pub visible: bool,
}

/// The public contact form. Validated client-side before any request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Trimmed wire form of [`ContactForm`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// The field checks that block a submission before it reaches the
    /// network. Mirrors the required-field and email-shape rules the backend
    /// also enforces, so honest input never round-trips just to fail.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(ApiError::Validation("Email is required".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ApiError::Validation("Message is required".to_string()));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ApiError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        Ok(())
    }

    /// Trimmed payload with the default subject filled in.
    pub fn to_payload(&self) -> ContactPayload {
        let subject = self.subject.trim();
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: if subject.is_empty() {
                "Portfolio Contact".to_string()
            } else {
                subject.to_string()
            },
            message: self.message.trim().to_string(),
        }
    }
}

/// Shape check: `local@domain.tld`, no whitespace, non-empty parts.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tech_stack_trims_and_drops_empties() {
        assert_eq!(
            split_tech_stack("React, Node.js ,  , TypeScript"),
            vec!["React", "Node.js", "TypeScript"]
        );
        assert!(split_tech_stack("").is_empty());
        assert!(split_tech_stack(" , ,").is_empty());
    }

    #[test]
    fn test_blank_optional_urls_are_omitted_from_the_body() {
        let draft = ProjectDraft {
            name: "Demo".to_string(),
            description: "A demo".to_string(),
            tech_stack: split_tech_stack("Rust, Dioxus"),
            status: ProjectStatus::Draft,
            github_url: blank_to_none("  "),
            live_url: blank_to_none("https://demo.example.com"),
            featured: false,
            order: 0,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("githubUrl").is_none());
        assert_eq!(
            body.get("liveUrl").and_then(|v| v.as_str()),
            Some("https://demo.example.com")
        );
        assert_eq!(
            body.get("techStack").unwrap().as_array().unwrap().len(),
            2
        );
    }

    #[test]
    fn test_skill_draft_wire_names() {
        let draft = SkillDraft {
            name: "Rust".to_string(),
            level: 90,
            category: SkillCategory::Backend,
            icon: None,
            color: Some("#CE422B".to_string()),
            order: 1,
            visible: true,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body.get("category").and_then(|v| v.as_str()), Some("BACKEND"));
        assert!(body.get("icon").is_none());
        assert_eq!(body.get("order").and_then(|v| v.as_i64()), Some(1));
    }

    #[test]
    fn test_contact_validation_blocks_bad_input() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Hello".to_string(),
        };
        assert!(form.validate().is_ok());

        form.email = "not-an-email".to_string();
        assert!(matches!(form.validate(), Err(ApiError::Validation(_))));

        form.email = "ada@example.com".to_string();
        form.message = "   ".to_string();
        assert!(matches!(form.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_contact_payload_trims_and_defaults_subject() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            email: " ada@example.com ".to_string(),
            subject: "  ".to_string(),
            message: " Hello ".to_string(),
        };
        let payload = form.to_payload();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.subject, "Portfolio Contact");
        assert_eq!(payload.message, "Hello");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email("a@b."));
    }
}
