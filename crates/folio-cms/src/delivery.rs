//! Email delivery through EmailJS.
//!
//! The REST form of `emailjs.sendForm`: the form's named fields travel as
//! `template_params`, and the three account identifiers select the service,
//! the template and the sender account.

use async_trait::async_trait;
use folio_common::{FolioError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::response::check_response_status;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The contact form fields, named as the email template expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub subject: String,
    pub message: String,
}

#[async_trait]
pub trait MailDelivery: Send + Sync {
    /// Relay one filled-in contact form. Resolves on acceptance.
    async fn send_form(&self, params: &TemplateParams) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
}

fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }

impl Default for EmailJsSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

impl EmailJsSettings {
    /// Names of the identifiers left empty.
    pub fn missing_ids(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

pub struct EmailJsClient {
    settings: EmailJsSettings,
    client: reqwest::Client,
}

impl EmailJsClient {
    pub fn new(settings: EmailJsSettings) -> Self {
        Self::with_client(settings, reqwest::Client::new())
    }

    pub fn with_client(settings: EmailJsSettings, client: reqwest::Client) -> Self {
        Self { settings, client }
    }
}

#[async_trait]
impl MailDelivery for EmailJsClient {
    #[instrument(skip(self, params), fields(service = %self.settings.service_id))]
    async fn send_form(&self, params: &TemplateParams) -> Result<()> {
        let missing = self.settings.missing_ids();
        if !missing.is_empty() {
            return Err(FolioError::Config(format!(
                "Service d'envoi d'e-mails non configuré ({})",
                missing.join(", ")
            )));
        }

        let body = SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: params,
        };
        let resp = self.client.post(&self.settings.endpoint).json(&body).send().await?;
        check_response_status(resp).await?;
        debug!("email accepted for delivery");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TemplateParams {
        TemplateParams {
            user_name: "Ada".into(),
            user_email: "ada@example.com".into(),
            subject: "Bonjour".into(),
            message: "Un message".into(),
        }
    }

    #[test]
    fn missing_ids_lists_blank_fields() {
        let settings = EmailJsSettings {
            service_id: "service_x".into(),
            template_id: "  ".into(),
            ..Default::default()
        };
        assert_eq!(settings.missing_ids(), vec!["template_id", "public_key"]);
    }

    #[test]
    fn default_endpoint_is_emailjs() {
        assert_eq!(EmailJsSettings::default().endpoint, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn unconfigured_client_fails_before_any_request() {
        // Unroutable endpoint: reaching the network would surface as Http, not Config.
        let client = EmailJsClient::new(EmailJsSettings {
            endpoint: "http://127.0.0.1:9/unused".into(),
            ..Default::default()
        });
        let err = client.send_form(&params()).await.unwrap_err();
        assert!(matches!(err, FolioError::Config(_)), "got {err:?}");
    }

    #[test]
    fn request_body_uses_emailjs_field_names() {
        let p = params();
        let body = serde_json::to_value(SendRequest {
            service_id: "s",
            template_id: "t",
            user_id: "k",
            template_params: &p,
        })
        .unwrap();
        assert_eq!(body["user_id"], "k");
        assert_eq!(body["template_params"]["user_email"], "ada@example.com");
    }
}
