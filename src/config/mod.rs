//! Configuration management for the gateway
//!
//! Configuration is read from a YAML file, overridden by environment
//! variables, and validated before use.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::EnvOverrides;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/research.yaml";

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut gateway = GatewayConfig::default();
        EnvOverrides::from_process().apply(&mut gateway)?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, then apply environment overrides
    ///
    /// A missing file is not an error: the defaults plus the environment may
    /// be enough. A file that exists but cannot be parsed is, and so is a
    /// path that cannot be checked at all.
    pub async fn load<P: AsRef<Path>>(path: P, overrides: &EnvOverrides) -> Result<Self> {
        let path = path.as_ref();

        let mut gateway = if tokio::fs::try_exists(path).await? {
            info!("Loading configuration from: {:?}", path);
            let content = tokio::fs::read_to_string(path).await?;
            serde_yaml::from_str::<GatewayConfig>(&content)
                .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?
        } else {
            warn!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            GatewayConfig::default()
        };

        overrides.apply(&mut gateway)?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get Gemini settings
    pub fn gemini(&self) -> &GeminiSettings {
        &self.gateway.gemini
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.gateway
            .gemini
            .validate()
            .map_err(|e| GatewayError::Config(format!("Gemini config error: {}", e)))?;

        self.gateway
            .logging
            .validate()
            .map_err(|e| GatewayError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
