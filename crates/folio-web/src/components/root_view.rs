//! Root view: owns the one-time project load.
//!
//! Mounting spawns a single fetch and publishes its outcome through a watch
//! channel. Readers see `Loading` until the fetch settles, then `Ready` with
//! the collection (empty when the fetch failed). Nothing ever goes back to
//! `Loading` and nothing retries.

use folio_cms::ContentApi;
use folio_common::Project;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub enum LoadPhase {
    Loading,
    Ready(Arc<Vec<Project>>),
}

#[derive(Debug, Clone)]
pub struct RootView {
    phase: watch::Receiver<LoadPhase>,
}

impl RootView {
    /// Start the project fetch. Must be called inside a tokio runtime.
    pub fn mount(api: Arc<dyn ContentApi>) -> (Self, JoinHandle<()>) {
        let (tx, rx) = watch::channel(LoadPhase::Loading);
        let handle = tokio::spawn(load_projects(api, tx));
        (Self { phase: rx }, handle)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.phase.borrow(), LoadPhase::Loading)
    }

    /// Wait for the load to settle. `None` if the loader went away without
    /// publishing (task aborted).
    pub async fn ready(&mut self) -> Option<Arc<Vec<Project>>> {
        let phase = self
            .phase
            .wait_for(|p| matches!(p, LoadPhase::Ready(_)))
            .await
            .ok()?;
        match &*phase {
            LoadPhase::Ready(projects) => Some(projects.clone()),
            LoadPhase::Loading => None,
        }
    }
}

async fn load_projects(api: Arc<dyn ContentApi>, tx: watch::Sender<LoadPhase>) {
    let projects = match api.list_projects().await {
        Ok(projects) => {
            info!(n = projects.len(), "projects loaded");
            projects
        }
        Err(e) => {
            error!(error = %e, "failed to fetch projects");
            Vec::new()
        }
    };

    // Every receiver gone means the view was torn down; drop the result.
    if tx.send(LoadPhase::Ready(Arc::new(projects))).is_err() {
        debug!("root view unmounted before projects arrived");
    }
}
