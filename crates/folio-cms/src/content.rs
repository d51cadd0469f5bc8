//! Content API client (Strapi).
//!
//! API: {base}/api/projets?populate=cover&populate=categories
//!      {base}/api/contacts

use async_trait::async_trait;
use folio_common::{ContactSubmission, Project, Result};
use tracing::{debug, instrument};

use crate::dto::{decode_projects, ContactEnvelope};
use crate::response::check_response_status;

const PROJECTS_PATH: &str = "/api/projets";
const CONTACTS_PATH: &str = "/api/contacts";

/// Proof that a contact record was accepted by the content API.
/// Only a successful `create_contact` hands one out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persisted {
    /// Id assigned by the API, when the response carried one.
    pub id: Option<u64>,
}

impl Persisted {
    pub fn new(id: Option<u64>) -> Self {
        Self { id }
    }
}

/// The two content API operations the portfolio uses.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Full project collection with cover and categories expanded.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Store one contact record. Any non-2xx answer is an error.
    async fn create_contact(&self, submission: &ContactSubmission) -> Result<Persisted>;
}

pub struct StrapiClient {
    base_url: String,
    client: reqwest::Client,
}

impl StrapiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ContentApi for StrapiClient {
    #[instrument(skip(self), fields(base = %self.base_url))]
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = format!("{}{}", self.base_url, PROJECTS_PATH);
        let resp = self
            .client
            .get(&url)
            .query(&[("populate", "cover"), ("populate", "categories")])
            .send()
            .await?;
        let body = check_response_status(resp).await?.text().await?;
        let projects = decode_projects(&body)?;
        debug!(n = projects.len(), "projects fetched");
        Ok(projects)
    }

    #[instrument(skip(self, submission), fields(base = %self.base_url))]
    async fn create_contact(&self, submission: &ContactSubmission) -> Result<Persisted> {
        let url = format!("{}{}", self.base_url, CONTACTS_PATH);
        let resp = self
            .client
            .post(&url)
            .json(&ContactEnvelope::from(submission))
            .send()
            .await?;
        let resp = check_response_status(resp).await?;

        // The created entry is echoed back; its id is informational only.
        let id = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["data"]["id"].as_u64());
        debug!(?id, "contact record stored");
        Ok(Persisted::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StrapiClient::new("http://localhost:1337/");
        assert_eq!(client.base_url(), "http://localhost:1337");
    }
}
