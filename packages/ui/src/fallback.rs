//! Static placeholder content for the public pages.
//!
//! The public renderer must never show an empty section because the backend
//! is down or nothing is published yet; these fixed entries take over in
//! that case.

use api::{ApiError, Project, ProjectStatus, Skill};

/// The fixed project set shown when the published list is empty or the fetch
/// failed.
pub fn sample_projects() -> Vec<Project> {
    let entry = |id: &str, description: &str, tech: &[&str]| Project {
        id: id.to_string(),
        name: "Coming Soon".to_string(),
        description: description.to_string(),
        tech_stack: tech.iter().map(|t| t.to_string()).collect(),
        status: ProjectStatus::Published,
        github_url: None,
        live_url: None,
        image: None,
        featured: false,
        order_index: 0,
        created_at: String::new(),
        updated_at: String::new(),
    };

    vec![
        entry(
            "sample-1",
            "Exciting projects are currently in development. Check back soon to see the \
             latest work featuring cutting-edge technologies and innovative solutions.",
            &["React", "Next.js", "TypeScript", "Node.js"],
        ),
        entry(
            "sample-2",
            "Working on amazing full-stack applications with modern architecture. Stay \
             tuned for updates on these exciting projects.",
            &["PostgreSQL", "MongoDB", "Express", "Tailwind CSS"],
        ),
        entry(
            "sample-3",
            "Building scalable solutions with AI-powered features. More details coming \
             soon as development progresses.",
            &["LangGraph", "FastAPI", "Docker", "AWS"],
        ),
    ]
}

/// Static skill-category cards shown when no visible skills come back.
pub struct SkillCategoryCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORY_CARDS: [SkillCategoryCard; 4] = [
    SkillCategoryCard {
        title: "Frontend",
        icon: "\u{1F3A8}",
        skills: &[
            "React / Next.js",
            "TypeScript",
            "Tailwind CSS",
            "Framer Motion",
        ],
    },
    SkillCategoryCard {
        title: "Backend",
        icon: "\u{2699}\u{FE0F}",
        skills: &["Node.js / Express", "REST APIs", "GraphQL", "PostgreSQL"],
    },
    SkillCategoryCard {
        title: "AI / Agentic Workflows",
        icon: "\u{1F916}",
        skills: &["LangChain", "LangGraph"],
    },
    SkillCategoryCard {
        title: "Tools",
        icon: "\u{1F6E0}\u{FE0F}",
        skills: &["Git", "Docker", "AWS", "Vercel"],
    },
];

/// What the public projects section renders: published server data when there
/// is any, the fixed sample set otherwise (failure included).
pub fn displayable_projects(fetched: Result<Vec<Project>, ApiError>) -> Vec<Project> {
    match fetched {
        Ok(projects) => {
            let published: Vec<Project> =
                projects.into_iter().filter(Project::is_published).collect();
            if published.is_empty() {
                sample_projects()
            } else {
                published
            }
        }
        Err(_) => sample_projects(),
    }
}

/// Visible skills for the public section, or `None` when the static category
/// cards should render instead.
pub fn displayable_skills(fetched: Result<Vec<Skill>, ApiError>) -> Option<Vec<Skill>> {
    let visible: Vec<Skill> = fetched
        .ok()?
        .into_iter()
        .filter(|skill| skill.visible)
        .collect();
    if visible.is_empty() {
        None
    } else {
        Some(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            tech_stack: Vec::new(),
            status,
            github_url: None,
            live_url: None,
            image: None,
            featured: false,
            order_index: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn skill(id: &str, visible: bool) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_string(),
            level: 50,
            category: Default::default(),
            icon: None,
            color: None,
            order_index: 0,
            visible,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_published_projects_pass_through() {
        let shown = displayable_projects(Ok(vec![
            project("p1", ProjectStatus::Published),
            project("p2", ProjectStatus::Draft),
        ]));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "p1");
    }

    #[test]
    fn test_fetch_failure_falls_back_to_samples() {
        let shown = displayable_projects(Err(ApiError::Network("down".to_string())));
        assert_eq!(shown.len(), sample_projects().len());
        assert!(shown.iter().all(|p| p.name == "Coming Soon"));
    }

    #[test]
    fn test_zero_published_falls_back_to_samples() {
        let shown = displayable_projects(Ok(vec![
            project("p1", ProjectStatus::Draft),
            project("p2", ProjectStatus::Archived),
        ]));
        assert!(!shown.is_empty());
        assert!(shown.iter().all(|p| p.name == "Coming Soon"));
    }

    #[test]
    fn test_hidden_skills_are_filtered_out() {
        let shown = displayable_skills(Ok(vec![skill("s1", true), skill("s2", false)])).unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "s1");
    }

    #[test]
    fn test_no_visible_skills_yields_static_cards() {
        assert!(displayable_skills(Ok(vec![skill("s2", false)])).is_none());
        assert!(displayable_skills(Err(ApiError::Network("down".to_string()))).is_none());
    }
}
