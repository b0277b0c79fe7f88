//! Gemini client integration tests
//!
//! Drive `GeminiClient` against a mock provider and check the exact wire
//! traffic it produces.

#[cfg(test)]
mod tests {
    use crate::common::fixtures;
    use crate::common::provider::{GENERATE_PATH, MockGemini, TEST_API_KEY, unreachable_endpoint};
    use research_assistant::{GeminiClient, GeminiSettings, InferenceBackend, ResearchError};
    use std::time::Duration;
    use wiremock::matchers::{
        body_json, header, method, path, query_param, query_param_is_missing,
    };
    use wiremock::{Mock, ResponseTemplate};

    // ==================== Request shape ====================

    /// The body is the generateContent envelope and the key ends the URL
    #[tokio::test]
    async fn test_sends_envelope_with_key_suffix() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", TEST_API_KEY))
            .and(header("content-type", "application/json"))
            .and(body_json(fixtures::request_envelope("hello model")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::single_text("hi")),
            )
            .expect(1)
            .mount(&gemini.server)
            .await;

        let client = GeminiClient::new(&gemini.settings()).unwrap();
        let body = client.call_inference("hello model").await.unwrap();

        let decoded: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded, fixtures::single_text("hi"));
    }

    /// The key is appended verbatim, with no separator added
    #[tokio::test]
    async fn test_key_is_concatenated_verbatim() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&gemini.server)
            .await;

        let client = GeminiClient::new(&gemini.settings()).unwrap();
        assert_eq!(
            client.request_url(),
            format!("{}{}", gemini.endpoint_with_key_param(), TEST_API_KEY)
        );
        client.call_inference("x").await.unwrap();
    }

    /// Prompt text with quotes and newlines survives JSON encoding
    #[tokio::test]
    async fn test_prompt_is_json_escaped() {
        let prompt = "Line one\n\"quoted\" \\ backslash\ttab";
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .and(body_json(fixtures::request_envelope(prompt)))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&gemini.server)
            .await;

        let client = GeminiClient::new(&gemini.settings()).unwrap();
        client.call_inference(prompt).await.unwrap();
    }

    /// Header placement keeps the key out of the URL
    #[tokio::test]
    async fn test_header_key_placement() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .and(query_param_is_missing("key"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&gemini.server)
            .await;

        let client = GeminiClient::new(&gemini.header_settings()).unwrap();
        assert_eq!(client.request_url(), gemini.bare_endpoint());
        client.call_inference("x").await.unwrap();
    }

    // ==================== Response handling ====================

    /// Malformed bodies are returned untouched; decoding happens later
    #[tokio::test]
    async fn test_returns_raw_body_on_success() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&gemini.server)
            .await;

        let client = GeminiClient::new(&gemini.settings()).unwrap();
        assert_eq!(client.call_inference("x").await.unwrap(), "not json");
    }

    /// A non-2xx status is a hard failure carrying status and body
    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(429).set_body_string(r#"{"error":"quota exceeded"}"#),
            )
            .mount(&gemini.server)
            .await;

        let client = GeminiClient::new(&gemini.settings()).unwrap();
        let err = client.call_inference("x").await.unwrap_err();

        match err {
            ResearchError::UpstreamStatus { status, body } => {
                assert_eq!(status, 429);
                assert!(body.contains("quota exceeded"));
            }
            other => panic!("expected UpstreamStatus, got {:?}", other),
        }
    }

    /// An echoed key is redacted from the error body
    #[tokio::test]
    async fn test_error_body_redacts_key() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string(format!("API key {} not valid", TEST_API_KEY)),
            )
            .mount(&gemini.server)
            .await;

        let client = GeminiClient::new(&gemini.settings()).unwrap();
        let err = client.call_inference("x").await.unwrap_err();

        assert!(!err.to_string().contains(TEST_API_KEY));
    }

    // ==================== Transport failures ====================

    /// Nothing listening on the port is a transport error
    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let settings = GeminiSettings::new(unreachable_endpoint(), TEST_API_KEY);
        let client = GeminiClient::new(&settings).unwrap();

        let err = client.call_inference("x").await.unwrap_err();

        assert!(matches!(err, ResearchError::Transport(_)));
        assert!(!err.to_string().contains(TEST_API_KEY));
    }

    /// A configured timeout aborts slow responses
    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&gemini.server)
            .await;

        let client = GeminiClient::new(&gemini.settings().with_timeout(1)).unwrap();
        let err = client.call_inference("x").await.unwrap_err();

        match err {
            ResearchError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
