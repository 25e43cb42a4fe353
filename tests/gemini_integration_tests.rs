use nur::ai::{GeminiClient, EXPLANATION_FALLBACK};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const MODEL: &str = "gemini-3-flash-preview";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key".to_string(), MODEL.to_string(), Some(server.uri()))
}

fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", MODEL)
}

/// Wraps candidate text in the service's response envelope.
fn envelope(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

// ============================================================================
// Verse of the Day
// ============================================================================

#[tokio::test]
async fn verse_success_parses_structured_output() {
    let mock_server = MockServer::start().await;

    let verse_json =
        "{\"arabic\":\"فَإِنَّ مَعَ الْعُسْرِ يُسْرًا\",\"translation\":\"Indeed, with hardship comes ease.\",\"reference\":\"Quran 94:5\"}";

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(verse_json)))
        .mount(&mock_server)
        .await;

    let verse = client_for(&mock_server).verse_of_the_day().await;

    let verse = verse.expect("verse should parse");
    assert_eq!(verse.translation, "Indeed, with hardship comes ease.");
    assert_eq!(verse.reference, "Quran 94:5");
    assert!(!verse.arabic.is_empty());
}

#[tokio::test]
async fn verse_http_failure_resolves_to_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    assert_eq!(client_for(&mock_server).verse_of_the_day().await, None);
}

#[tokio::test]
async fn verse_malformed_payload_resolves_to_absent() {
    let mock_server = MockServer::start().await;

    // 200 with text that is not the promised JSON shape
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("sorry, no JSON today")))
        .mount(&mock_server)
        .await;

    assert_eq!(client_for(&mock_server).verse_of_the_day().await, None);
}

#[tokio::test]
async fn verse_missing_fields_resolves_to_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("{\"arabic\":\"x\"}")))
        .mount(&mock_server)
        .await;

    assert_eq!(client_for(&mock_server).verse_of_the_day().await, None);
}

#[tokio::test]
async fn verse_empty_candidate_list_resolves_to_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .mount(&mock_server)
        .await;

    assert_eq!(client_for(&mock_server).verse_of_the_day().await, None);
}

#[tokio::test]
async fn verse_unreachable_service_resolves_to_absent() {
    // nothing is listening on the mock address once the server is dropped
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let client = GeminiClient::new("test-key".to_string(), MODEL.to_string(), Some(uri));
    assert_eq!(client.verse_of_the_day().await, None);
}

// ============================================================================
// Hadith Explanation
// ============================================================================

#[tokio::test]
async fn explanation_success_returns_completion_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "This hadith teaches that deeds take their worth from intention.",
        )))
        .mount(&mock_server)
        .await;

    let text = client_for(&mock_server)
        .explain_hadith("إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ", "Actions are judged by intentions.")
        .await;

    assert_eq!(
        text,
        "This hadith teaches that deeds take their worth from intention."
    );
}

#[tokio::test]
async fn explanation_failure_returns_fallback_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let text = client_for(&mock_server)
        .explain_hadith("arabic", "translation")
        .await;

    assert_eq!(text, EXPLANATION_FALLBACK);
    assert!(!text.is_empty());
}

#[tokio::test]
async fn explanation_empty_completion_returns_fallback_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("   ")))
        .mount(&mock_server)
        .await;

    let text = client_for(&mock_server)
        .explain_hadith("arabic", "translation")
        .await;

    assert_eq!(text, EXPLANATION_FALLBACK);
}
