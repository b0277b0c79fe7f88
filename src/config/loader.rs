//! Environment variable overrides
//!
//! Variables are read through a lookup table rather than straight from the
//! process so the same code path can be exercised with fixed values.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::collections::HashMap;
use std::env;
use tracing::debug;

/// Environment variables understood by the gateway
pub const ENV_VARS: [&str; 9] = [
    "GEMINI_API_URL",
    "GEMINI_API_KEY",
    "GEMINI_KEY_PLACEMENT",
    "GEMINI_TIMEOUT_SECS",
    "RESEARCH_HOST",
    "RESEARCH_PORT",
    "RESEARCH_WORKERS",
    "RESEARCH_LOG_LEVEL",
    "RESEARCH_LOG_FORMAT",
];

/// A snapshot of configuration-related environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    values: HashMap<String, String>,
}

impl EnvOverrides {
    /// Read the known variables from the process environment
    pub fn from_process() -> Self {
        let values = ENV_VARS
            .iter()
            .filter_map(|name| env::var(name).ok().map(|value| (name.to_string(), value)))
            .collect();
        Self { values }
    }

    /// Build from explicit name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a single value, replacing any existing one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Apply the overrides on top of `config`
    pub fn apply(&self, config: &mut GatewayConfig) -> Result<()> {
        if let Some(url) = self.get("GEMINI_API_URL") {
            config.gemini.api_url = url.to_string();
        }
        if let Some(key) = self.get("GEMINI_API_KEY") {
            config.gemini.api_key = key.to_string();
        }
        if let Some(placement) = self.get("GEMINI_KEY_PLACEMENT") {
            config.gemini.key_placement = placement.parse().map_err(GatewayError::Config)?;
        }
        if let Some(timeout) = self.get("GEMINI_TIMEOUT_SECS") {
            config.gemini.timeout_secs = Some(
                timeout
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid timeout: {}", e)))?,
            );
        }

        if let Some(host) = self.get("RESEARCH_HOST") {
            config.server.host = host.to_string();
        }
        if let Some(port) = self.get("RESEARCH_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = self.get("RESEARCH_WORKERS") {
            config.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }

        if let Some(level) = self.get("RESEARCH_LOG_LEVEL") {
            config.logging.level = level.to_string();
        }
        if let Some(format) = self.get("RESEARCH_LOG_FORMAT") {
            config.logging.format = format.parse().map_err(GatewayError::Config)?;
        }

        debug!("Applied {} environment overrides", self.values.len());
        Ok(())
    }
}
