//! Configuration loading for Folio.
//! Reads folio.toml from the current directory or the path in FOLIO_CONFIG,
//! then applies FOLIO_* environment overrides.

use folio_cms::EmailJsSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be an absolute http(s) URL, got {value:?}")]
    InvalidUrl { field: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cms: CmsConfig,
    #[serde(default)]
    pub email: EmailJsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_bind()       -> String { "127.0.0.1:3001".to_string() }
fn default_static_dir() -> String { concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), static_dir: default_static_dir() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Origin of the content API; also the prefix of every cover image URL.
    #[serde(default = "default_cms_base_url")]
    pub base_url: String,
}

fn default_cms_base_url() -> String { "http://localhost:1337".to_string() }

impl Default for CmsConfig {
    fn default() -> Self {
        Self { base_url: default_cms_base_url() }
    }
}

mod tests;

impl Config {
    /// Load configuration from folio.toml (built-in defaults when absent),
    /// apply environment overrides and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "folio.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
            Self::from_toml(&content)?
        } else {
            tracing::info!(%path, "no config file, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay FOLIO_* variables as returned by `lookup`. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("FOLIO_BIND") {
            self.server.bind = v;
        }
        if let Some(v) = get("FOLIO_CMS_BASE_URL") {
            self.cms.base_url = v;
        }
        if let Some(v) = get("FOLIO_EMAILJS_SERVICE_ID") {
            self.email.service_id = v;
        }
        if let Some(v) = get("FOLIO_EMAILJS_TEMPLATE_ID") {
            self.email.template_id = v;
        }
        if let Some(v) = get("FOLIO_EMAILJS_PUBLIC_KEY") {
            self.email.public_key = v;
        }
    }

    /// Check URLs and normalise the content API origin (no trailing slash).
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        check_http_url("cms.base_url", &self.cms.base_url)?;
        check_http_url("email.endpoint", &self.email.endpoint)?;
        self.cms.base_url = self.cms.base_url.trim_end_matches('/').to_string();
        Ok(())
    }
}

fn check_http_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidUrl { field, value: value.to_string() };
    let url = Url::parse(value).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(invalid()),
    }
}
