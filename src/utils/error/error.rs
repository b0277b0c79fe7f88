//! Error handling for the gateway
//!
//! This module defines the error types surfaced by the binaries and the HTTP
//! layer.

#![allow(missing_docs)]

use crate::core::research::ResearchError;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Provider call failed or returned an error status
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Config(_)
            | GatewayError::Io(_)
            | GatewayError::Yaml(_)
            | GatewayError::Server(_)
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "CONFIG_ERROR",
            GatewayError::Io(_) => "IO_ERROR",
            GatewayError::Yaml(_) => "CONFIG_ERROR",
            GatewayError::BadRequest(_) => "BAD_REQUEST",
            GatewayError::Upstream(_) => "UPSTREAM_ERROR",
            GatewayError::Server(_) => "SERVER_ERROR",
            GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        GatewayError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Don't leak file system details to HTTP clients
            GatewayError::Io(_) => "I/O operation failed".to_string(),
            // `code` already classifies these; the message is the cause alone
            GatewayError::BadRequest(message) | GatewayError::Upstream(message) => {
                message.clone()
            }
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(GatewayError::status_code(self)).json(error_response)
    }
}

/// JSON error body returned by the HTTP layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

impl From<ResearchError> for GatewayError {
    fn from(error: ResearchError) -> Self {
        match error {
            ResearchError::InvalidOperation(_) => GatewayError::BadRequest(error.to_string()),
            ResearchError::Transport(_) | ResearchError::UpstreamStatus { .. } => {
                GatewayError::Upstream(error.to_string())
            }
            ResearchError::Configuration(message) => GatewayError::Config(message),
        }
    }
}
