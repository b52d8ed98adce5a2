//! Chat request/response models and status categories

use crate::SEARCH_MODE;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a chat-completions request.
///
/// Always a single user message, search mode `auto` and the model name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub search_parameters: SearchParameters,
    pub model: String,
}

impl ChatRequest {
    /// Build the request for an already validated query
    pub fn new(query: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(query)],
            search_parameters: SearchParameters::default(),
            model: model.into(),
        }
    }

    /// Content of the user message
    pub fn query(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Live search directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    pub mode: String,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            mode: SEARCH_MODE.to_string(),
        }
    }
}

/// The parts of a chat-completions response we read.
///
/// Every field is optional so that a missing piece shows up as `None`
/// from [`ChatResponse::answer`] instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Read a parsed body; `None` when it does not have the expected types
    pub fn from_json(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    /// Content of the first choice's message
    pub fn answer(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }

    pub fn into_answer(mut self) -> Option<String> {
        if self.choices.is_empty() {
            return None;
        }
        self.choices.swap_remove(0).message?.content
    }
}

/// Human-readable category for a failed HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    MalformedRequest,
    InvalidCredential,
    AccessDenied,
    ModelNotFound,
    RateLimited,
    ServerError,
    Unknown,
}

impl StatusCategory {
    /// Classify a status code
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::MalformedRequest,
            401 => Self::InvalidCredential,
            403 => Self::AccessDenied,
            404 => Self::ModelNotFound,
            429 => Self::RateLimited,
            500 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRequest => write!(f, "malformed request"),
            Self::InvalidCredential => write!(f, "invalid credential"),
            Self::AccessDenied => write!(f, "access denied, insufficient permission"),
            Self::ModelNotFound => write!(f, "model not found or inaccessible"),
            Self::RateLimited => write!(f, "rate limited"),
            Self::ServerError => write!(f, "upstream internal error"),
            Self::Unknown => write!(f, "unknown error"),
        }
    }
}
