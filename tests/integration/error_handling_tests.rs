//! Error handling integration tests
//!
//! Verify that pipeline errors reach HTTP callers with the right status and
//! error body.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use research_assistant::{GatewayError, ResearchError};

    async fn error_body(error: &GatewayError) -> serde_json::Value {
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    // ==================== ResearchError to GatewayError Conversion ====================

    #[actix_web::test]
    async fn test_invalid_operation_flow() {
        let error: GatewayError = ResearchError::invalid_operation("translate").into();

        assert_eq!(error.error_response().status().as_u16(), 400);
        let body = error_body(&error).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "Unknown Operation: translate");
        assert!(body["error"]["timestamp"].is_i64());
    }

    #[actix_web::test]
    async fn test_upstream_status_flow() {
        let error: GatewayError = ResearchError::UpstreamStatus {
            status: 503,
            body: "overloaded".to_string(),
        }
        .into();

        assert_eq!(error.error_response().status().as_u16(), 502);
        let body = error_body(&error).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[actix_web::test]
    async fn test_configuration_flow() {
        let error: GatewayError = ResearchError::configuration("bad timeout").into();

        assert_eq!(error.error_response().status().as_u16(), 500);
        let body = error_body(&error).await;
        assert_eq!(body["error"]["code"], "CONFIG_ERROR");
    }

    #[test]
    fn test_client_errors_are_classified() {
        assert!(ResearchError::invalid_operation("x").is_client_error());
        assert!(!ResearchError::configuration("x").is_client_error());
        assert!(
            !ResearchError::UpstreamStatus {
                status: 400,
                body: String::new()
            }
            .is_client_error()
        );
    }
}
