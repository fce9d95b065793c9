//! Public portfolio listing: persisted projects merged with the static
//! catalog, plus the category filter set derived from both.

use serde::Serialize;

use crate::types::DbId;

/// Pseudo-category that selects every project in the filter bar.
pub const ALL_CATEGORY: &str = "All";

/// A project as rendered on the public page.
///
/// Absent URLs are omitted from the serialized form rather than emitted as
/// `null`; an empty screenshot list is omitted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub status: String,
}

/// Composed listing served to the public page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub projects: Vec<PortfolioProject>,
    pub categories: Vec<String>,
}

/// Place persisted projects ahead of the static catalog and derive the
/// category filter set.
pub fn compose_listing(
    persisted: Vec<PortfolioProject>,
    catalog: Vec<PortfolioProject>,
) -> Listing {
    let mut projects = persisted;
    projects.extend(catalog);
    let categories = categories_for(&projects);
    Listing {
        projects,
        categories,
    }
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories_for(projects: &[PortfolioProject]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for project in projects {
        if !categories[1..].contains(&project.category) {
            categories.push(project.category.clone());
        }
    }
    categories
}
