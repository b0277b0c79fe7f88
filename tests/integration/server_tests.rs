//! HTTP surface integration tests
//!
//! The full actix application in front of the real client and a mock
//! provider.

#[cfg(test)]
mod tests {
    use crate::common::fixtures;
    use crate::common::provider::{MockGemini, TEST_API_KEY};
    use actix_web::{test, web};
    use research_assistant::config::{Config, EnvOverrides};
    use research_assistant::core::research::NO_CONTENT_SENTINEL;
    use research_assistant::server::{AppState, HttpServer};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, query_param};
    use wiremock::{Mock, ResponseTemplate};

    async fn config_for(gemini: &MockGemini) -> Config {
        let dir = tempfile::tempdir().unwrap();
        let overrides = EnvOverrides::from_pairs([
            ("GEMINI_API_URL", gemini.endpoint_with_key_param()),
            ("GEMINI_API_KEY", TEST_API_KEY.to_string()),
        ]);
        Config::load(dir.path().join("research.yaml"), &overrides)
            .await
            .unwrap()
    }

    async fn state_for(gemini: &MockGemini) -> web::Data<AppState> {
        let config = config_for(gemini).await;
        let server = HttpServer::new(&config).unwrap();
        web::Data::new(server.state().clone())
    }

    #[actix_web::test]
    async fn test_process_returns_generated_text() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .and(query_param("key", TEST_API_KEY))
            .and(body_json(fixtures::request_envelope(
                "Provide a clear and concise summary of the following text in a few sentences:\n\nCats are mammals.",
            )))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::single_text("A short summary.")),
            )
            .expect(1)
            .mount(&gemini.server)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&gemini).await)).await;
        let req = test::TestRequest::post()
            .uri("/api/research/process")
            .set_json(json!({"operation": "summarize", "content": "Cats are mammals."}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("text/plain"))
        );
        assert_eq!(test::read_body(resp).await, "A short summary.");
    }

    #[actix_web::test]
    async fn test_process_returns_sentinel_with_ok_status() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::no_candidates()))
            .mount(&gemini.server)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&gemini).await)).await;
        let req = test::TestRequest::post()
            .uri("/api/research/process")
            .set_json(json!({"operation": "suggest", "content": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(test::read_body(resp).await, NO_CONTENT_SENTINEL);
    }

    #[actix_web::test]
    async fn test_unknown_operation_is_bad_request() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&gemini.server)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&gemini).await)).await;
        let req = test::TestRequest::post()
            .uri("/api/research/process")
            .set_json(json!({"operation": "translate", "content": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Unknown Operation: translate");
    }

    #[actix_web::test]
    async fn test_provider_failure_is_bad_gateway() {
        let gemini = MockGemini::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&gemini.server)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&gemini).await)).await;
        let req = test::TestRequest::post()
            .uri("/api/research/process")
            .set_json(json!({"operation": "summarize", "content": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 502);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let gemini = MockGemini::start().await;

        let app = test::init_service(HttpServer::create_app(state_for(&gemini).await)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_cors_preflight_is_allowed() {
        let gemini = MockGemini::start().await;

        let app = test::init_service(HttpServer::create_app(state_for(&gemini).await)).await;
        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/research/process")
            .insert_header(("Origin", "chrome-extension://abcdef"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key("access-control-allow-origin"));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let gemini = MockGemini::start().await;

        let app = test::init_service(HttpServer::create_app(state_for(&gemini).await)).await;
        let req = test::TestRequest::get().uri("/api/research/missing").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 404);
    }
}
