//! View components. Each owns its own state; none share mutable state.

pub mod category_filter;
pub mod contact_form;
pub mod root_view;

pub use category_filter::{CategoryFilter, CategorySelection, FilterView};
pub use contact_form::{ContactError, ContactFields, ContactForm, SubmissionStatus, SubmitStage};
pub use root_view::{LoadPhase, RootView};
