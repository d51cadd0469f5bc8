//! HTTP handlers for all web routes.

pub mod contact;
pub mod portfolio;
