//! Folio Web Server
//!
//! Run with: cargo run -p folio-web

use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use folio_web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; FOLIO_* and RUST_LOG may come from the shell instead
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Folio Web Server...");

    let config = Config::load()?;
    let missing = config.email.missing_ids();
    if !missing.is_empty() {
        warn!(
            missing = %missing.join(", "),
            "EmailJS not fully configured; contact messages will be stored but not emailed"
        );
    }

    let addr: SocketAddr = config.server.bind.parse()?;
    info!(cms = %config.cms.base_url, "content API");

    // Mounting the root view starts the one-time project fetch.
    let state = folio_web::state::AppState::new(config)?;
    let app = folio_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
