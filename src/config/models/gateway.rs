//! Top-level gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Gateway configuration as read from `research.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini endpoint and credentials
    #[serde(default)]
    pub gemini: GeminiSettings,
    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}
