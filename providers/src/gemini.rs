//! Google Gemini GenerateContent client.
//!
//! Communicates with `{base_url}/models/{model}:generateContent`. Narration
//! is a single non-streaming request: prompt in, candidate text out.

use reqwest::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

use hexcast_types::Trigram;

use crate::retry::{RetryConfig, RetryOutcome, send_with_retry};
use crate::{NarrationConfig, http_client, read_capped_error_body};

/// Narration failures. All recoverable: the resolved cast stands, the user
/// sees a message and may retry.
#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("narration request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("narration request failed after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        source: reqwest::Error,
    },
    #[error("narration API error {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("narration response contained no text")]
    MissingText,
}

/// Format the interpretation prompt for a resolved hexagram.
///
/// Names both trigrams with their concepts and asks for a concise, evocative
/// interpretation in Spanish with musical leanings.
#[must_use]
pub fn narration_prompt(lower: &Trigram, upper: &Trigram) -> String {
    format!(
        "Interpreta el hexagrama del I Ching formado por el trigrama inferior '{} ({})' \
         (representando '{}') y el trigrama superior '{} ({})' (representando '{}'). \
         Describe su significado general, simbolismo clave y posibles implicaciones o \
         inspiraciones para la composición musical. Sé conciso y evocador, en español.",
        lower.name,
        lower.chinese_name,
        lower.ideas.concept,
        upper.name,
        upper.chinese_name,
        upper.ideas.concept,
    )
}

fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }]
    })
}

/// Concatenate the text parts of the first candidate, if any.
fn extract_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let mut text = String::new();
    for part in parts {
        if let Some(fragment) = part.get("text").and_then(Value::as_str) {
            text.push_str(fragment);
        }
    }

    if text.is_empty() { None } else { Some(text) }
}

/// Client for the narration service.
///
/// Cheap to clone (the underlying HTTP client is shared).
#[derive(Debug, Clone)]
pub struct NarrationClient {
    client: reqwest::Client,
    config: NarrationConfig,
    retry: RetryConfig,
}

impl NarrationClient {
    #[must_use]
    pub fn new(config: NarrationConfig) -> Self {
        Self {
            client: http_client().clone(),
            config,
            retry: RetryConfig::default(),
        }
    }

    /// Replace the HTTP transport (tests use a plain client against a local
    /// mock server, which the hardened default refuses to talk to).
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    /// Fetch a narration for the resolved trigram pair.
    pub async fn narrate(&self, lower: &Trigram, upper: &Trigram) -> Result<String, NarrationError> {
        let prompt = narration_prompt(lower, upper);
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url(),
            self.config.model()
        );
        let body = build_request_body(&prompt);

        tracing::debug!(model = self.config.model(), "Requesting hexagram narration");

        let outcome = send_with_retry(
            || {
                self.client
                    .post(&url)
                    .header("x-goog-api-key", self.config.api_key())
                    .header("content-type", "application/json")
                    .json(&body)
            },
            &self.retry,
        )
        .await;

        let response = match outcome {
            RetryOutcome::Success(response) => response,
            RetryOutcome::HttpError(response) => {
                let status = response.status();
                let body = read_capped_error_body(response).await;
                return Err(NarrationError::Api { status, body });
            }
            RetryOutcome::ConnectionError { attempts, source } => {
                return Err(NarrationError::Exhausted { attempts, source });
            }
            RetryOutcome::NonRetryable(e) => return Err(NarrationError::Transport(e)),
        };

        let payload: Value = response.json().await?;
        extract_text(&payload).ok_or(NarrationError::MissingText)
    }
}

#[cfg(test)]
mod tests {
    use super::{NarrationClient, NarrationError, extract_text, narration_prompt};
    use crate::NarrationConfig;
    use crate::retry::RetryConfig;
    use hexcast_types::ApiKey;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn trigrams() -> (hexcast_types::Trigram, hexcast_types::Trigram) {
        let catalog: Vec<hexcast_types::Trigram> = test_catalog();
        (catalog[0], catalog[1])
    }

    // Minimal two-entry slice of the content table; enough for prompt and
    // request assertions without depending on hexcast-core.
    fn test_catalog() -> Vec<hexcast_types::Trigram> {
        use hexcast_types::{LineTriple, MusicalElements, SuperColliderIdeas, Trigram, TrigramId};
        let musical = MusicalElements {
            scales_melody: "m",
            texture: "t",
            polyrhythm: "p",
        };
        vec![
            Trigram {
                id: TrigramId::Qian,
                name: "Cielo",
                chinese_name: "乾 Qián",
                symbol: "☰",
                lines: LineTriple::new(true, true, true),
                musical,
                ideas: SuperColliderIdeas {
                    concept: "Pureza, fuerza creativa, expansión. Sonidos brillantes y celestiales.",
                    synth_example: "s",
                    pattern_example: "p",
                },
            },
            Trigram {
                id: TrigramId::Kun,
                name: "Tierra",
                chinese_name: "坤 Kūn",
                symbol: "☷",
                lines: LineTriple::new(false, false, false),
                musical,
                ideas: SuperColliderIdeas {
                    concept: "Receptividad, nutrición, pasividad. Sonidos profundos y envolventes.",
                    synth_example: "s",
                    pattern_example: "p",
                },
            },
        ]
    }

    fn client_for(server: &MockServer) -> NarrationClient {
        let config = NarrationConfig::new(ApiKey::new("test-key"))
            .with_model("gemini-test")
            .with_base_url(server.uri());
        NarrationClient::new(config)
            .with_client(reqwest::Client::new())
            .with_retry(RetryConfig {
                initial_delay: Duration::from_millis(10),
                max_delay: Duration::from_millis(50),
                ..RetryConfig::default()
            })
    }

    #[test]
    fn prompt_mentions_both_trigrams() {
        let (lower, upper) = trigrams();
        let prompt = narration_prompt(&lower, &upper);
        assert!(prompt.contains("trigrama inferior 'Cielo (乾 Qián)'"));
        assert!(prompt.contains("trigrama superior 'Tierra (坤 Kūn)'"));
        assert!(prompt.contains(lower.ideas.concept));
        assert!(prompt.contains(upper.ideas.concept));
        assert!(prompt.ends_with("en español."));
    }

    #[test]
    fn extract_text_concatenates_parts() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hola " }, { "text": "mundo" }] }
            }]
        });
        assert_eq!(extract_text(&payload), Some("Hola mundo".to_string()));
    }

    #[test]
    fn extract_text_rejects_empty_candidates() {
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        assert_eq!(
            extract_text(&json!({
                "candidates": [{ "content": { "parts": [] } }]
            })),
            None
        );
    }

    #[tokio::test]
    async fn narrate_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{}] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Una interpretación." }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (lower, upper) = trigrams();
        let text = client_for(&server).narrate(&lower, &upper).await.unwrap();
        assert_eq!(text, "Una interpretación.");
    }

    #[tokio::test]
    async fn narrate_surfaces_api_errors_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string("API key not valid"),
            )
            .mount(&server)
            .await;

        let (lower, upper) = trigrams();
        let err = client_for(&server).narrate(&lower, &upper).await.unwrap_err();
        match err {
            NarrationError::Api { status, body } => {
                assert_eq!(status.as_u16(), 400);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn narrate_retries_transient_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Recuperado" }] }
                }]
            })))
            .with_priority(2)
            .mount(&server)
            .await;

        let (lower, upper) = trigrams();
        let text = client_for(&server).narrate(&lower, &upper).await.unwrap();
        assert_eq!(text, "Recuperado");
    }

    #[tokio::test]
    async fn narrate_rejects_missing_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [] } }]
            })))
            .mount(&server)
            .await;

        let (lower, upper) = trigrams();
        let err = client_for(&server).narrate(&lower, &upper).await.unwrap_err();
        assert!(matches!(err, NarrationError::MissingText));
    }
}
