//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock server that simulates the Gemini API
pub async fn start_gemini_mock() -> MockServer {
    MockServer::start().await
}

/// Mount a GenerateContent response with the given candidate text
pub async fn mount_narration_response(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        })))
        .mount(server)
        .await;
}

/// Mount a failing GenerateContent response
pub async fn mount_narration_error(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}
