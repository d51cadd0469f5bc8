//! Shared testing utilities: fixtures and in-memory stand-ins for the
//! content API and the email-delivery service.

use async_trait::async_trait;
use folio_cms::{ContentApi, MailDelivery, Persisted, TemplateParams};
use folio_common::{Category, ContactSubmission, CoverImage, FolioError, Project, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// ── Fixtures ───────────────────────────────────────────────────────────────

pub const PROJECTS_JSON: &str = include_str!("../fixtures/projects.json");

/// The two-project collection: "Projet Web" tagged Web, "Projet Mobile" tagged Mobile.
pub fn sample_projects() -> Vec<Project> {
    folio_cms::dto::decode_projects(PROJECTS_JSON).expect("fixture decodes")
}

/// A project with the given category names; ids follow list position.
pub fn project(id: u64, title: &str, categories: &[&str]) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: format!("Description de {title}"),
        link: format!("https://example.com/{id}"),
        cover: CoverImage { medium_url: format!("/uploads/medium_{id}.png") },
        categories: categories
            .iter()
            .enumerate()
            .map(|(i, name)| Category { id: i as u64 + 1, name: name.to_string() })
            .collect(),
    }
}

/// How a fake answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Accept,
    /// Non-success status with the given body text.
    Reject { status: u16, message: String },
    /// Fails without any service response, like a refused connection.
    Unreachable,
}

impl Reply {
    pub fn reject(status: u16, message: &str) -> Self {
        Reply::Reject { status, message: message.to_string() }
    }

    fn to_result(&self) -> Result<()> {
        match self {
            Reply::Accept => Ok(()),
            Reply::Reject { status, message } => Err(FolioError::Status {
                status: *status,
                message: message.clone(),
            }),
            Reply::Unreachable => Err(FolioError::Other(anyhow::anyhow!("connection refused"))),
        }
    }
}

// ── Content API ────────────────────────────────────────────────────────────

pub struct FakeContentApi {
    projects: Reply,
    collection: Vec<Project>,
    contacts: Reply,
    gate: Option<Arc<Notify>>,
    list_calls: AtomicUsize,
    stored: Mutex<Vec<ContactSubmission>>,
}

impl FakeContentApi {
    pub fn with_projects(collection: Vec<Project>) -> Self {
        Self {
            projects: Reply::Accept,
            collection,
            contacts: Reply::Accept,
            gate: None,
            list_calls: AtomicUsize::new(0),
            stored: Mutex::new(Vec::new()),
        }
    }

    /// Project listing fails with `reply`.
    pub fn failing_projects(reply: Reply) -> Self {
        Self { projects: reply, ..Self::with_projects(Vec::new()) }
    }

    /// Contact creation answers with `reply`.
    pub fn contacts(mut self, reply: Reply) -> Self {
        self.contacts = reply;
        self
    }

    /// Hold `list_projects` open until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Contact submissions the API was asked to store, accepted or not.
    pub fn stored(&self) -> Vec<ContactSubmission> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentApi for FakeContentApi {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.projects.to_result()?;
        Ok(self.collection.clone())
    }

    async fn create_contact(&self, submission: &ContactSubmission) -> Result<Persisted> {
        let mut stored = self.stored.lock().unwrap();
        stored.push(submission.clone());
        self.contacts.to_result()?;
        Ok(Persisted::new(Some(stored.len() as u64)))
    }
}

// ── Mail delivery ──────────────────────────────────────────────────────────

pub struct FakeMailDelivery {
    reply: Reply,
    sent: Mutex<Vec<TemplateParams>>,
}

impl FakeMailDelivery {
    pub fn accepting() -> Self {
        Self::answering(Reply::Accept)
    }

    pub fn answering(reply: Reply) -> Self {
        Self { reply, sent: Mutex::new(Vec::new()) }
    }

    /// Every delivery attempt, accepted or not.
    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailDelivery for FakeMailDelivery {
    async fn send_form(&self, params: &TemplateParams) -> Result<()> {
        self.sent.lock().unwrap().push(params.clone());
        self.reply.to_result()
    }
}
