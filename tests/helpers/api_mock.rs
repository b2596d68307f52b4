//! Mock directory API server for testing
//!
//! This module provides a mock HTTP server with fixed, per-endpoint responses
//! for exercising error paths. It uses wiremock to create configurable mock
//! responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock directory API server for testing
pub struct DirectoryMockServer {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn failing(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_body(body: Value) -> Self {
        Self {
            custom_response: Some(body),
            ..Default::default()
        }
    }
}

impl DirectoryMockServer {
    /// Create a new mock directory API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();

        Self { server, base_url }
    }

    /// Mount a response for one method and path
    pub async fn mock(&self, http_method: &str, endpoint: &str, config: MockResponseConfig) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if (200..300).contains(&config.status) {
                json!([])
            } else {
                json!({ "error": format!("status {}", config.status) })
            }
        });

        let mut response = ResponseTemplate::new(config.status).set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Mount a response whose body is not JSON
    pub async fn mock_raw(&self, http_method: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Setup listings with the sample directory
    pub async fn setup_default_mocks(&self) {
        self.mock("GET", "/campuses", MockResponseConfig::with_body(super::sample_campuses_json()))
            .await;
        self.mock("GET", "/students", MockResponseConfig::with_body(super::sample_students_json()))
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
