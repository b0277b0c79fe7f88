//! Hard failures of the research pipeline
//!
//! Only input contract violations and transport problems live here. A
//! malformed provider response is never an error: the extractor turns it
//! into a sentinel string instead.

use thiserror::Error;

/// Result type alias for the research pipeline
pub type ResearchResult<T> = std::result::Result<T, ResearchError>;

/// Errors that abort a research request
#[derive(Error, Debug)]
pub enum ResearchError {
    /// The request named an operation outside the supported set
    #[error("Unknown Operation: {0}")]
    InvalidOperation(String),

    /// Connecting, sending, or reading the provider response failed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status
    #[error("Provider returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The inference client could not be built from its settings
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResearchError {
    /// Create an invalid operation error
    pub fn invalid_operation(operation: impl Into<String>) -> Self {
        Self::InvalidOperation(operation.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the failure was caused by the caller rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}
