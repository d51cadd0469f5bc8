//! Errors surfaced by HTTP handlers.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::messages::GENERIC_ERROR;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(GENERIC_ERROR)).into_response()
    }
}
