//! Error types for Grok-Search

use crate::search::StatusCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, GrokError>;

/// Every failure a configuration load or a search can surface
#[derive(Error, Debug)]
pub enum GrokError {
    /// Query was not text or was blank after trimming
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Credential is empty or still the sample placeholder
    #[error("Invalid credential: set a valid xAI API key")]
    InvalidCredential,

    #[error("Configuration file {} does not exist", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration file {} could not be read: {source}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {} is not valid JSON: {source}", path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration file {} is missing required field `{field}`", path.display())]
    ConfigIncomplete { path: PathBuf, field: &'static str },

    /// Non-2xx response from the API
    #[error("HTTP error {status}: {category}")]
    HttpError {
        status: u16,
        category: StatusCategory,
        body_preview: String,
    },

    /// Body of a successful response was not JSON
    #[error("Failed to parse response as JSON: {source}\nResponse body: {body}")]
    ResponseMalformed {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// JSON parsed but `choices[0].message.content` was missing
    #[error("Invalid response format: {body}")]
    ResponseShapeInvalid { body: String },

    /// Transport-level failure (connect, DNS, timeout)
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl GrokError {
    /// Whether the failure happened before anything was sent
    pub fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::InvalidCredential
                | Self::ConfigNotFound { .. }
                | Self::ConfigUnreadable { .. }
                | Self::ConfigMalformed { .. }
                | Self::ConfigIncomplete { .. }
        )
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
