use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    /// Transport failure: connection refused, timeout, broken body stream.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("Remote service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A payload parsed as JSON but does not have the shape we rely on.
    #[error("Unexpected content shape for project {project}: missing `{path}`")]
    Decode { project: String, path: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Text suitable for showing to a visitor, if the error carries any.
    ///
    /// Service rejections expose the body the service sent back; transport
    /// failures expose the transport message. Everything else has nothing a
    /// visitor could act on.
    pub fn service_message(&self) -> Option<String> {
        let text = match self {
            FolioError::Status { message, .. } => message.trim().to_string(),
            FolioError::Http(e) => e.to_string(),
            FolioError::Config(msg) => msg.clone(),
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
