//! Research endpoint
//!
//! `POST /api/research/process` with `{"operation": "...", "content": "..."}`.
//! The pipeline's string result is returned as `text/plain`, sentinel
//! strings included.

use crate::core::research::ResearchRequest;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use crate::utils::sanitization::sanitize_log_data;
use actix_web::{HttpResponse, web};
use tracing::{error, info, warn};

/// Configure research routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/research").route("/process", web::post().to(process_content)));
}

/// Run one research request
pub async fn process_content(
    state: web::Data<AppState>,
    request: web::Json<ResearchRequest>,
) -> Result<HttpResponse, GatewayError> {
    let request = request.into_inner();
    info!(
        operation = %request.operation,
        content_chars = request.content.chars().count(),
        "Research request received"
    );

    match state.service.process_content(&request).await {
        Ok(text) => Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text)),
        Err(e) if e.is_client_error() => {
            warn!("Rejected research request: {}", e);
            Err(e.into())
        }
        Err(e) => {
            error!(
                "Research request failed: {}",
                sanitize_log_data(&e.to_string())
            );
            Err(e.into())
        }
    }
}
