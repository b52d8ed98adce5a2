//! Transport trait and request/response types

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A JSON POST to the chat-completions endpoint
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// URL to post to
    pub url: String,
    /// Credential sent as `Authorization: Bearer <token>`
    pub bearer_token: String,
    /// JSON body
    pub body: serde_json::Value,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ApiRequest {
    pub fn new(
        url: impl Into<String>,
        bearer_token: impl Into<String>,
        body: serde_json::Value,
        timeout: Duration,
    ) -> Self {
        Self {
            url: url.into(),
            bearer_token: bearer_token.into(),
            body,
            timeout,
        }
    }
}

/// Raw HTTP response, before any interpretation
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase for the status, empty when unknown
    pub reason: String,
    /// Response body as text
    pub text: String,
}

impl ApiResponse {
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self {
            status,
            reason,
            text: text.into(),
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if response indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Sends one request and hands back the raw response.
///
/// Implementations must not retry and must not treat non-2xx statuses as
/// errors; only transport failures are `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status_helpers() {
        let ok = ApiResponse::new(200, "{}");
        assert!(ok.is_success());
        assert_eq!(ok.reason, "OK");

        let limited = ApiResponse::new(429, "slow down");
        assert!(!limited.is_success());
        assert!(limited.is_rate_limited());
        assert_eq!(limited.reason, "Too Many Requests");
    }

    #[test]
    fn test_unknown_status_has_empty_reason() {
        let odd = ApiResponse::new(599, "");
        assert!(odd.reason.is_empty());
        assert!(!odd.is_success());
    }
}
