//! HTTP client for talking to the xAI API

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::error::Result;
use crate::{DEFAULT_TIMEOUT, VERSION};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Pooled HTTP client; cheap to clone and safe to share between searches
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a new HTTP client with a custom default timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            user_agent: format!("grok-search/{}", VERSION),
        })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Execute a JSON POST
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        debug!("POST {} (timeout {:?})", request.url, request.timeout);

        let response = self
            .client
            .post(&request.url)
            .timeout(request.timeout)
            .header("Authorization", format!("Bearer {}", request.bearer_token))
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.user_agent)
            .json(&request.body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Parse response into ApiResponse
    async fn parse_response(response: Response) -> Result<ApiResponse> {
        let status = response.status();
        let text = response.text().await?;

        Ok(ApiResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            text,
        })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrokError;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(url: String, body: serde_json::Value) -> ApiRequest {
        ApiRequest::new(url, "test-key", body, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
        assert!(client.unwrap().user_agent().starts_with("grok-search/"));
    }

    #[tokio::test]
    async fn test_sends_headers_and_body() {
        let server = MockServer::start().await;
        let body = json!({"model": "grok-3-latest"});

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/v1/chat/completions", server.uri());
        let response = client.execute(request(url, body)).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.reason, "OK");
        assert_eq!(response.text, "{}");
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.send(request(server.uri(), json!({}))).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.text, "boom");
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on port 1 locally
        let client = HttpClient::new().unwrap();
        let result = client
            .send(request("http://127.0.0.1:1/".to_string(), json!({})))
            .await;

        assert!(matches!(result, Err(GrokError::Network(_))));
    }
}
