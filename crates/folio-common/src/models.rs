/// Domain types for the portfolio and the contact form.
/// Wire shapes live in folio-cms; these are what the view works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub link: String,
    pub cover: CoverImage,
    pub categories: Vec<Category>,
}

impl Project {
    /// True when any of the project's categories carries exactly `name`.
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }
}

/// A category attached to a project. Ids are only unique within one
/// project's list; the view groups categories by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Cover image
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    /// Path of the medium-sized format, relative to the content API origin.
    pub medium_url: String,
}

impl CoverImage {
    /// Absolute URL of the medium format: plain concatenation onto `base`.
    pub fn resolve(&self, base: &str) -> String {
        format!("{}{}", base, self.medium_url)
    }
}

// ---------------------------------------------------------------------------
// Contact submission
// ---------------------------------------------------------------------------

/// One contact record as stored by the content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub date: DateTime<Utc>,
}
