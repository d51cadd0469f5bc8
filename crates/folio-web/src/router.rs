//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{contact::contact_submit, portfolio::portfolio_page};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(portfolio_page))
        .route("/contact", post(contact_submit))
        // Static files
        .nest_service("/static", static_dir)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
