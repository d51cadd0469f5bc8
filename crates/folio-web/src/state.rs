//! Shared application state for the web server.

use std::sync::Arc;

use folio_cms::{ContentApi, EmailJsClient, MailDelivery, StrapiClient};

use crate::components::RootView;
use crate::config::Config;
use crate::error::WebError;
use crate::render::Renderer;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub content: Arc<dyn ContentApi>,
    pub mailer: Arc<dyn MailDelivery>,
    /// Mounted once; holds the project collection for the process lifetime.
    pub root: RootView,
    pub renderer: Renderer,
}

impl AppState {
    /// Wire the real Strapi and EmailJS clients. Mounts the root view, so
    /// this must run inside a tokio runtime.
    pub fn new(config: Config) -> Result<Self, WebError> {
        let client = reqwest::Client::new();
        let content: Arc<dyn ContentApi> =
            Arc::new(StrapiClient::with_client(config.cms.base_url.clone(), client.clone()));
        let mailer: Arc<dyn MailDelivery> =
            Arc::new(EmailJsClient::with_client(config.email.clone(), client));
        Self::with_services(config, content, mailer)
    }

    pub fn with_services(
        config: Config,
        content: Arc<dyn ContentApi>,
        mailer: Arc<dyn MailDelivery>,
    ) -> Result<Self, WebError> {
        let renderer = Renderer::new()?;
        let (root, _loader) = RootView::mount(content.clone());
        Ok(Self { config, content, mailer, root, renderer })
    }
}

pub type SharedState = Arc<AppState>;
