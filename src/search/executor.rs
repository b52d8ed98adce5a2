//! Search execution against the chat-completions endpoint

use super::models::{ChatRequest, ChatResponse, StatusCategory};
use super::pacing::PacingDelay;
use crate::config::Settings;
use crate::error::{GrokError, Result};
use crate::network::{ApiRequest, ApiResponse, HttpClient, Transport};
use crate::{DEFAULT_TIMEOUT, ERROR_PREVIEW_CHARS, RESPONSE_PREVIEW_CHARS};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Client that turns one query into one answer
pub struct SearchClient {
    /// Credential, endpoint and model
    settings: Settings,
    /// Outbound HTTP
    transport: Arc<dyn Transport>,
    /// Pre-request delay range
    pacing: PacingDelay,
    /// Per-request timeout
    timeout: Duration,
}

impl SearchClient {
    /// Create a client backed by a fresh pooled HTTP client
    pub fn new(settings: Settings) -> Result<Self> {
        let client = HttpClient::new()?;
        Ok(Self::with_transport(settings, Arc::new(client)))
    }

    /// Create a client on top of an existing transport
    pub fn with_transport(settings: Settings, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings,
            transport,
            pacing: PacingDelay::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
        }
    }

    /// Set the pacing delay range
    pub fn with_pacing(mut self, pacing: PacingDelay) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pacing(&self) -> PacingDelay {
        self.pacing
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the model and return the text of its first choice.
    ///
    /// Makes at most one request and never retries. With `verbose` set,
    /// progress and response previews are logged at info level.
    pub async fn search(&self, query: &str, verbose: bool) -> Result<String> {
        let query = validate_query(query)?;
        self.validate_credential()?;

        self.pace(verbose).await;

        let body = json!(ChatRequest::new(query, &self.settings.model));
        let request = ApiRequest::new(
            &self.settings.base_url,
            &self.settings.api_key,
            body,
            self.timeout,
        );

        if verbose {
            info!("Sending search request to the xAI API");
            info!("Request URL: {}", self.settings.base_url);
        }

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Network request failed: {}", e);
                return Err(e);
            }
        };

        interpret(response, verbose)
    }

    /// Credential is re-checked on every call
    fn validate_credential(&self) -> Result<()> {
        if self.settings.has_usable_api_key() {
            Ok(())
        } else {
            Err(GrokError::InvalidCredential)
        }
    }

    async fn pace(&self, verbose: bool) {
        let delay = self.pacing.sample();
        if delay.is_zero() {
            return;
        }
        if verbose {
            info!(
                "Waiting {:.1}s to avoid the rate limit...",
                delay.as_secs_f64()
            );
        } else {
            debug!("Pacing delay {:?}", delay);
        }
        tokio::time::sleep(delay).await;
    }
}

/// Trimmed query, or `InvalidInput` when nothing is left
fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(GrokError::InvalidInput("query must not be empty".to_string()));
    }
    Ok(trimmed)
}

/// Turn a raw response into the answer text or a categorized error
fn interpret(response: ApiResponse, verbose: bool) -> Result<String> {
    if verbose {
        info!("Response status: {} {}", response.status, response.reason);
        info!(
            "Response body (first {} chars): {}",
            RESPONSE_PREVIEW_CHARS,
            preview(&response.text, RESPONSE_PREVIEW_CHARS)
        );
    }

    if !response.is_success() {
        let category = StatusCategory::from_status(response.status);
        let body_preview = preview(&response.text, ERROR_PREVIEW_CHARS).to_string();
        if verbose {
            error!("Error: {}", category);
            error!("Response body: {}", body_preview);
        }
        return Err(GrokError::HttpError {
            status: response.status,
            category,
            body_preview,
        });
    }

    let value: Value = match serde_json::from_str(&response.text) {
        Ok(value) => value,
        Err(source) => {
            return Err(GrokError::ResponseMalformed {
                source,
                body: response.text,
            })
        }
    };

    if verbose {
        info!("Search succeeded");
    }

    let answer = ChatResponse::from_json(&value).and_then(ChatResponse::into_answer);
    answer.ok_or_else(|| GrokError::ResponseShapeInvalid {
        body: value.to_string(),
    })
}

/// Leading `limit` characters of `text`
fn preview(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
