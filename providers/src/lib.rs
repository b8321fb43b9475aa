//! Gemini narration client for hexcast.
//!
//! # Architecture
//!
//! One provider, one request shape: after a cast resolves, the caller hands
//! over the two resolved trigrams and [`NarrationClient::narrate`] fetches a
//! free-text interpretation from the Gemini GenerateContent API.
//!
//! - [`narration_prompt`] - formats the Spanish interpretation prompt from
//!   the two trigram records
//! - [`NarrationClient`] - owns the HTTP transport and request configuration
//! - [`retry`] - exponential-backoff retry policy shared by every request
//!
//! # Error Handling
//!
//! All failures surface as [`NarrationError`]. Narration is strictly
//! fire-and-forget from the cast engine's perspective: an error here never
//! invalidates an already-resolved hexagram.

pub mod retry;

mod gemini;

pub use gemini::{NarrationClient, NarrationError, narration_prompt};

use std::sync::OnceLock;
use std::time::Duration;

use hexcast_types::ApiKey;

/// Canonical Gemini API base URL.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for hexagram narration unless configuration overrides it.
pub const DEFAULT_NARRATION_MODEL: &str = "gemini-2.5-flash-preview-04-17";

const CONNECT_TIMEOUT_SECS: u64 = 30;
const REQUEST_TIMEOUT_SECS: u64 = 60;
const TCP_KEEPALIVE_SECS: u64 = 60;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder().build().unwrap_or_else(|e| {
            tracing::error!(
                "Failed to build hardened HTTP client: {e}. Attempting minimal hardened fallback."
            );
            reqwest::Client::builder()
                .https_only(true)
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("Minimal hardened HTTP client must build; cannot proceed without TLS")
        })
    })
}

fn base_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .https_only(true)
        .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
}

/// Read an error response body with a hard size cap.
pub async fn read_capped_error_body(response: reqwest::Response) -> String {
    use futures_util::StreamExt;
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

/// Credentials and request tuning for the narration service.
///
/// Built from configuration at startup and threaded through explicitly;
/// nothing in hexcast reads narration credentials from ambient state.
#[derive(Debug, Clone)]
pub struct NarrationConfig {
    api_key: ApiKey,
    model: String,
    base_url: String,
}

impl NarrationConfig {
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            model: DEFAULT_NARRATION_MODEL.to_string(),
            base_url: GEMINI_API_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different endpoint (used by tests against a
    /// local mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
