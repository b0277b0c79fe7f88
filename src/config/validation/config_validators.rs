//! Core configuration validators
//!
//! Validation implementations for GatewayConfig, ServerConfig, GeminiSettings
//! and LoggingConfig.

use super::LOG_LEVELS;
use super::endpoint::validate_endpoint_url;
use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;
        self.gemini.validate()?;
        self.logging.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        if self.max_body_size > 1024 * 1024 * 100 {
            return Err("Max body size should not exceed 100MB".to_string());
        }

        Ok(())
    }
}

impl Validate for GeminiSettings {
    fn validate(&self) -> Result<(), String> {
        validate_endpoint_url(&self.api_url, "Gemini API URL")?;

        if self.api_key.trim().is_empty() {
            return Err("Gemini API key is required".to_string());
        }

        if self.api_key.chars().any(char::is_whitespace) {
            return Err("Gemini API key must not contain whitespace".to_string());
        }

        if self.timeout_secs == Some(0) {
            return Err("Gemini timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Log level must be one of {}, got: {}",
                LOG_LEVELS.join("|"),
                self.level
            ));
        }
        Ok(())
    }
}
