//! Narration flow tests: resolved cast -> prompt -> Gemini client

use crate::common::{mount_narration_error, mount_narration_response, start_gemini_mock};
use hexcast_core::{Catalog, FixedCoins, cast};
use hexcast_providers::{NarrationClient, NarrationConfig, NarrationError, narration_prompt};
use hexcast_types::ApiKey;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NarrationClient {
    let config = NarrationConfig::new(ApiKey::new("AIza-test"))
        .with_model("gemini-test")
        .with_base_url(server.uri());
    NarrationClient::new(config).with_client(reqwest::Client::new())
}

#[tokio::test]
async fn resolved_cast_flows_into_a_narration_request() {
    let server = start_gemini_mock().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "AIza-test"))
        .and(body_string_contains("Trueno"))
        .and(body_string_contains("Fuego"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "El trueno despierta al fuego." }] }
                }]
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let catalog = Catalog::builtin().unwrap();
    let mut coins = FixedCoins::from_trial_values(&[7, 8, 6, 9, 8, 7]).unwrap();
    let hexagram = cast(catalog, &mut coins).unwrap();

    let text = client_for(&server)
        .narrate(&hexagram.lower, &hexagram.upper)
        .await
        .unwrap();
    assert_eq!(text, "El trueno despierta al fuego.");
}

#[tokio::test]
async fn narration_failure_leaves_no_doubt_about_the_cause() {
    let server = start_gemini_mock().await;
    mount_narration_error(&server, 403, "quota exceeded").await;

    let catalog = Catalog::builtin().unwrap();
    let mut coins = FixedCoins::from_trial_values(&[7, 7, 7, 7, 7, 7]).unwrap();
    let hexagram = cast(catalog, &mut coins).unwrap();

    let err = client_for(&server)
        .narrate(&hexagram.lower, &hexagram.upper)
        .await
        .unwrap_err();
    match err {
        NarrationError::Api { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("quota exceeded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn narration_success_is_independent_of_line_details() {
    // The prompt is built from the resolved trigrams only; two casts that
    // resolve the same pair produce the same prompt even with different
    // changing lines.
    let catalog = Catalog::builtin().unwrap();
    let first = cast(
        catalog,
        &mut FixedCoins::from_trial_values(&[7, 7, 7, 8, 8, 8]).unwrap(),
    )
    .unwrap();
    let second = cast(
        catalog,
        &mut FixedCoins::from_trial_values(&[9, 9, 9, 6, 6, 6]).unwrap(),
    )
    .unwrap();

    assert_eq!(first.lower.id, second.lower.id);
    assert_eq!(first.upper.id, second.upper.id);
    assert_eq!(
        narration_prompt(&first.lower, &first.upper),
        narration_prompt(&second.lower, &second.upper)
    );

    let server = start_gemini_mock().await;
    mount_narration_response(&server, "Cielo sobre tierra.").await;
    let text = client_for(&server)
        .narrate(&second.lower, &second.upper)
        .await
        .unwrap();
    assert_eq!(text, "Cielo sobre tierra.");
}
