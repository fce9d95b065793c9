//! Admin form parsing and validation for new projects.
//!
//! The admin form submits every field as flat text. List-valued fields
//! (`technologies`, `screenshots`) arrive comma-delimited and are split
//! here; the resulting [`NewProject`] is what the repository inserts.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Status stored when the form leaves `status` empty.
pub const DEFAULT_STATUS: &str = "Completo";

/// User-facing message for any missing required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Raw admin form submission. Every field is optional at this stage so a
/// missing field and an empty one are handled the same way.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub status: Option<String>,
    /// Comma-delimited, e.g. `"React, Node.js, Vite"`.
    pub technologies: Option<String>,
    /// Comma-delimited image paths. May be omitted.
    pub screenshots: Option<String>,
}

/// A validated project ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewProject {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub full_description: String,
    #[validate(length(min = 1))]
    pub image: String,
    #[validate(length(min = 1))]
    pub technologies: Vec<String>,
    pub screenshots: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub status: String,
}

impl ProjectSubmission {
    /// Parse list fields and check required fields.
    ///
    /// Technologies are split before the required-field check, so an input
    /// made only of commas and whitespace counts as missing.
    pub fn into_new_project(self) -> Result<NewProject, CoreError> {
        let technologies = split_list(self.technologies.as_deref().unwrap_or_default());
        let screenshots = self
            .screenshots
            .as_deref()
            .map(split_list)
            .unwrap_or_default();

        let project = NewProject {
            title: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            full_description: self.full_description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            technologies,
            screenshots,
            demo_url: non_blank(self.demo_url),
            github_url: non_blank(self.github_url),
            status: non_blank(self.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        };

        project
            .validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        Ok(project)
    }
}

/// Split a comma-delimited list, trimming entries and dropping blank ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
