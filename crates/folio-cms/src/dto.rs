//! Wire shapes of the content API and their validating decode step.
//!
//! Strapi returns flat entries inside a `data` envelope. The raw structs
//! accept whatever the API may legitimately omit; `decode_projects` then
//! insists on the parts the view cannot render without and reports the
//! first missing one by path.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_common::{Category, ContactSubmission, CoverImage, FolioError, Project, Result};
use serde::{Deserialize, Serialize};

// ── Projects (GET /api/projets) ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProjectEnvelope {
    pub data: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
pub struct RawProject {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub link: String,
    #[serde(default)]
    pub cover: Option<RawCover>,
    #[serde(default)]
    pub categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Deserialize)]
pub struct RawCover {
    #[serde(default)]
    pub formats: Option<RawFormats>,
}

/// Only the medium format is rendered; thumbnail/small/large are ignored.
#[derive(Debug, Deserialize)]
pub struct RawFormats {
    #[serde(default)]
    pub medium: Option<RawFormat>,
}

#[derive(Debug, Deserialize)]
pub struct RawFormat {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawCategory {
    pub id: u64,
    pub name: String,
}

impl TryFrom<RawProject> for Project {
    type Error = FolioError;

    fn try_from(raw: RawProject) -> Result<Self> {
        let id = raw.id;
        let missing = move |path: &'static str| FolioError::Decode { project: id.to_string(), path };

        let formats = raw
            .cover
            .as_ref()
            .ok_or_else(|| missing("cover"))?
            .formats
            .as_ref()
            .ok_or_else(|| missing("cover.formats"))?;
        let medium_url = formats
            .medium
            .as_ref()
            .ok_or_else(|| missing("cover.formats.medium"))?
            .url
            .clone()
            .ok_or_else(|| missing("cover.formats.medium.url"))?;

        let categories = raw
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(|c| Category { id: c.id, name: c.name })
            .collect();

        Ok(Project {
            id: raw.id,
            title: raw.title,
            description: raw.description.unwrap_or_default(),
            link: raw.link,
            cover: CoverImage { medium_url },
            categories,
        })
    }
}

/// Parse a project collection body into domain projects, in API order.
pub fn decode_projects(body: &str) -> Result<Vec<Project>> {
    let envelope: ProjectEnvelope = serde_json::from_str(body)?;
    envelope.data.into_iter().map(Project::try_from).collect()
}

// ── Contacts (POST /api/contacts) ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ContactEnvelope<'a> {
    pub data: ContactData<'a>,
}

#[derive(Debug, Serialize)]
pub struct ContactData<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub date: String,
}

impl<'a> From<&'a ContactSubmission> for ContactEnvelope<'a> {
    fn from(s: &'a ContactSubmission) -> Self {
        Self {
            data: ContactData {
                name: &s.name,
                email: &s.email,
                subject: &s.subject,
                message: &s.message,
                date: iso_millis(s.date),
            },
        }
    }
}

/// `2024-06-01T09:30:00.000Z`, the format Strapi datetime fields expect.
fn iso_millis(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
