//! Gemini endpoint configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Header used when the key is not embedded in the URL
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Where the API key goes on the outbound request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPlacement {
    /// Appended verbatim to the endpoint string, as the Gemini REST examples do
    #[default]
    UrlSuffix,
    /// Sent in the `x-goog-api-key` header; the URL is left untouched
    Header,
}

impl fmt::Display for KeyPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPlacement::UrlSuffix => f.write_str("url_suffix"),
            KeyPlacement::Header => f.write_str("header"),
        }
    }
}

impl FromStr for KeyPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "url_suffix" | "url" | "suffix" => Ok(KeyPlacement::UrlSuffix),
            "header" => Ok(KeyPlacement::Header),
            other => Err(format!("Unknown key placement: {}", other)),
        }
    }
}

/// Gemini API settings
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Base endpoint; the key is concatenated onto it for `url_suffix`
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key
    #[serde(default)]
    pub api_key: String,
    /// Key placement on the request
    #[serde(default)]
    pub key_placement: KeyPlacement,
    /// Overall HTTP timeout; `None` keeps the HTTP client's default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            key_placement: KeyPlacement::default(),
            timeout_secs: None,
        }
    }
}

// The key never shows up in `{:?}` output.
impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_url", &self.api_url)
            .field(
                "api_key",
                &crate::utils::sanitization::mask_secret(&self.api_key),
            )
            .field("key_placement", &self.key_placement)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiSettings {
    /// Create settings for an endpoint and key with default placement
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Settings
    pub fn with_key_placement(mut self, key_placement: KeyPlacement) -> Self {
        self.key_placement = key_placement;
        self
    }

    /// Settings
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Configured timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
