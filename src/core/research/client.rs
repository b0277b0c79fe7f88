//! Gemini inference client
//!
//! Wraps the prompt in the generateContent envelope, sends one POST, and
//! hands back the raw response body. Decoding is left to the extractor.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::{debug, error};

use crate::config::{API_KEY_HEADER, GeminiSettings, KeyPlacement};
use crate::utils::sanitization::redact_secret;
use crate::utils::truncate_string;

use super::envelope::GenerateContentRequest;
use super::error::{ResearchError, ResearchResult};

/// Source of generated text for a prompt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Send `prompt` to the model and return the raw response body
    async fn call_inference(&self, prompt: &str) -> ResearchResult<String>;
}

/// Gemini API client
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_url: String,
    api_key: String,
    key_placement: KeyPlacement,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_url", &self.api_url)
            .field("key_placement", &self.key_placement)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with its own HTTP connection pool
    pub fn new(settings: &GeminiSettings) -> ResearchResult<Self> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| {
            ResearchError::configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self::with_http_client(settings, http_client))
    }

    /// Create a client on top of an existing HTTP client
    pub fn with_http_client(settings: &GeminiSettings, http_client: Client) -> Self {
        Self {
            http_client,
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            key_placement: settings.key_placement,
        }
    }

    /// Target URL for the request
    ///
    /// With [`KeyPlacement::UrlSuffix`] this is the configured endpoint with
    /// the key concatenated as-is: no separator, no encoding.
    pub fn request_url(&self) -> String {
        match self.key_placement {
            KeyPlacement::UrlSuffix => format!("{}{}", self.api_url, self.api_key),
            KeyPlacement::Header => self.api_url.clone(),
        }
    }

    fn redacted(&self, text: &str) -> String {
        redact_secret(text, &self.api_key)
    }

    fn transport_error(&self, e: reqwest::Error) -> ResearchError {
        // The URL carries the key; keep it out of the error.
        let e = e.without_url();
        error!("Gemini request failed: {}", self.redacted(&e.to_string()));
        ResearchError::Transport(e)
    }
}

#[async_trait]
impl InferenceBackend for GeminiClient {
    async fn call_inference(&self, prompt: &str) -> ResearchResult<String> {
        let url = self.request_url();
        let envelope = GenerateContentRequest::from_prompt(prompt);

        debug!(
            url = %self.redacted(&url),
            prompt_chars = prompt.chars().count(),
            "Sending Gemini generateContent request"
        );

        let mut request = self.http_client.post(&url).json(&envelope);
        if self.key_placement == KeyPlacement::Header {
            request = request.header(API_KEY_HEADER, &self.api_key);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        debug!(status = %status, body_bytes = body.len(), "Gemini response received");

        if !status.is_success() {
            let body = self.redacted(&body);
            error!(
                "Gemini returned error {}: {}",
                status,
                truncate_string(&body, 512)
            );
            return Err(ResearchError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
