//! folio-common — Shared domain types and errors used across all Folio crates.

pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::{FolioError, Result};
pub use models::{Category, ContactSubmission, CoverImage, Project};
