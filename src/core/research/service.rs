//! Research pipeline
//!
//! prompt building → one inference call → text extraction.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::config::GeminiSettings;

use super::client::{GeminiClient, InferenceBackend};
use super::error::ResearchResult;
use super::extract::extract_text;
use super::prompt::build_prompt;
use super::types::ResearchRequest;

/// Runs research requests against an inference backend
///
/// Holds no per-request state, so one instance can serve concurrent
/// requests.
#[derive(Clone)]
pub struct ResearchService {
    backend: Arc<dyn InferenceBackend>,
}

impl std::fmt::Debug for ResearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchService").finish_non_exhaustive()
    }
}

impl ResearchService {
    /// Create a service on top of any backend
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    /// Create a service backed by the Gemini API
    pub fn from_settings(settings: &GeminiSettings) -> ResearchResult<Self> {
        let client = GeminiClient::new(settings)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Process one request
    ///
    /// Returns the generated text or an extraction sentinel. Fails only for
    /// an unknown operation (before any network call) or a transport
    /// failure.
    #[instrument(skip_all, fields(operation = %request.operation))]
    pub async fn process_content(&self, request: &ResearchRequest) -> ResearchResult<String> {
        let prompt = build_prompt(request)?;
        debug!(prompt_chars = prompt.chars().count(), "Prompt built");

        let raw_body = self.backend.call_inference(&prompt).await?;

        let text = extract_text(&raw_body);
        info!(result_chars = text.chars().count(), "Research request completed");
        Ok(text)
    }
}
