//! Contact form: local field state plus a two-step submit pipeline.
//!
//!   Validating → Persisting → Delivering → success
//!
//! Each step only runs on the explicit success of the previous one. Delivery
//! takes the `Persisted` receipt, so it cannot be reached without a stored
//! record. A delivery failure after persistence leaves the record in place;
//! it is reported as a failure and logged as a partial success.

use chrono::Utc;
use folio_cms::{ContentApi, MailDelivery, Persisted, TemplateParams};
use folio_common::{ContactSubmission, FolioError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::messages::{GENERIC_ERROR, MESSAGE_SENT, PERSIST_FAILED, REQUIRED_FIELDS};

/// The four inputs, named as in the HTML form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    /// Names of the fields that are empty once whitespace is trimmed.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("user_name", &self.user_name),
            ("user_email", &self.user_email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    fn template_params(&self) -> TemplateParams {
        TemplateParams {
            user_name: self.user_name.clone(),
            user_email: self.user_email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// At most one of the two is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionStatus {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl SubmissionStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self { success: Some(message.into()), error: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { success: None, error: Some(message.into()) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStage {
    Validating,
    Persisting,
    Delivering,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("contact record not stored: {0}")]
    Persist(#[source] FolioError),

    #[error("contact record stored but email not delivered: {0}")]
    Deliver(#[source] FolioError),
}

impl ContactError {
    pub fn stage(&self) -> SubmitStage {
        match self {
            ContactError::MissingFields(_) => SubmitStage::Validating,
            ContactError::Persist(_) => SubmitStage::Persisting,
            ContactError::Deliver(_) => SubmitStage::Delivering,
        }
    }

    /// Most specific text available, else the generic message.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::MissingFields(_) => REQUIRED_FIELDS.to_string(),
            ContactError::Persist(FolioError::Status { .. }) => PERSIST_FAILED.to_string(),
            ContactError::Persist(e) | ContactError::Deliver(e) => {
                e.service_message().unwrap_or_else(|| GENERIC_ERROR.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self { fields, status: SubmissionStatus::default() }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Run the whole pipeline for the current fields.
    ///
    /// On success the status carries the confirmation and the fields are
    /// cleared; on failure the status carries the error text and the fields
    /// are kept for a retry. `&mut self` rules out two overlapping submits
    /// of the same form.
    pub async fn submit(
        &mut self,
        api: &dyn ContentApi,
        mailer: &dyn MailDelivery,
    ) -> Result<(), ContactError> {
        self.status = SubmissionStatus::default();

        let outcome = run_pipeline(&self.fields, api, mailer).await;
        match &outcome {
            Ok(()) => {
                info!("contact message sent");
                self.status = SubmissionStatus::success(MESSAGE_SENT);
                self.fields = ContactFields::default();
            }
            Err(e) => {
                match e {
                    ContactError::MissingFields(_) => debug!(error = %e, "contact form incomplete"),
                    ContactError::Deliver(_) => warn!(error = %e, "partial contact submission"),
                    ContactError::Persist(_) => error!(error = %e, "contact submission failed"),
                }
                self.status = SubmissionStatus::error(e.user_message());
            }
        }
        outcome
    }
}

async fn run_pipeline(
    fields: &ContactFields,
    api: &dyn ContentApi,
    mailer: &dyn MailDelivery,
) -> Result<(), ContactError> {
    debug!(stage = ?SubmitStage::Validating);
    validate(fields)?;

    debug!(stage = ?SubmitStage::Persisting);
    let receipt = persist(api, fields).await?;

    debug!(stage = ?SubmitStage::Delivering, record = ?receipt.id);
    deliver(mailer, &receipt, fields).await
}

fn validate(fields: &ContactFields) -> Result<(), ContactError> {
    let missing = fields.missing();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ContactError::MissingFields(missing))
    }
}

async fn persist(api: &dyn ContentApi, fields: &ContactFields) -> Result<Persisted, ContactError> {
    let submission = ContactSubmission {
        name: fields.user_name.clone(),
        email: fields.user_email.clone(),
        subject: fields.subject.clone(),
        message: fields.message.clone(),
        date: Utc::now(),
    };
    api.create_contact(&submission).await.map_err(ContactError::Persist)
}

async fn deliver(
    mailer: &dyn MailDelivery,
    _receipt: &Persisted,
    fields: &ContactFields,
) -> Result<(), ContactError> {
    mailer
        .send_form(&fields.template_params())
        .await
        .map_err(ContactError::Deliver)
}
