//! folio-web — Portfolio front end served over HTTP.
//! Provides:
//!   - the project list, fetched once from the content API
//!   - filtering by category
//!   - a contact form stored in the content API and relayed by email

pub mod components;
pub mod config;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod render;
pub mod router;
pub mod state;
