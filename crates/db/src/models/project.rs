//! Project entity model.

use portfolio_core::listing::PortfolioProject;
use portfolio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub screenshots: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

impl From<Project> for PortfolioProject {
    fn from(project: Project) -> Self {
        PortfolioProject {
            id: project.id,
            title: project.title,
            category: project.category,
            description: project.description,
            full_description: project.full_description,
            technologies: project.technologies,
            image: project.image,
            screenshots: project.screenshots,
            demo_url: project.demo_url,
            github_url: project.github_url,
            status: project.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn null_urls_are_absent_in_public_shape() {
        let row = Project {
            id: 1,
            title: "Racha".into(),
            category: "Produtividade".into(),
            description: "short".into(),
            full_description: "long".into(),
            technologies: vec!["React".into()],
            image: "/racha.png".into(),
            screenshots: Vec::new(),
            demo_url: None,
            github_url: Some("https://github.com/example/racha".into()),
            status: "Completo".into(),
            created_at: Utc::now(),
        };

        // The admin shape keeps the null, the public shape drops the key.
        let admin = serde_json::to_value(&row).unwrap();
        assert!(admin["demoUrl"].is_null());
        assert!(admin.as_object().unwrap().contains_key("demoUrl"));

        let public = serde_json::to_value(PortfolioProject::from(row)).unwrap();
        assert!(!public.as_object().unwrap().contains_key("demoUrl"));
        assert_eq!(public["githubUrl"], "https://github.com/example/racha");
    }
}
