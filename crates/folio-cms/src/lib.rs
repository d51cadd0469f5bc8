//! folio-cms — Clients for the services the portfolio depends on.
//!
//! Two collaborators live outside this repository:
//!   - the headless content API (Strapi) serving projects and storing
//!     contact records
//!   - the email-delivery service (EmailJS) relaying contact messages
//!
//! Each sits behind a trait so the view can be exercised without a network.

pub mod content;
pub mod delivery;
pub mod dto;
mod response;

pub use content::{ContentApi, Persisted, StrapiClient};
pub use delivery::{EmailJsClient, EmailJsSettings, MailDelivery, TemplateParams};
