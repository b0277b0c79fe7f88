//! Configuration data models
//!
//! This module defines all configuration structures used by the gateway.

#![allow(missing_docs)]

pub mod gateway;
pub mod gemini;
pub mod logging;
pub mod server;

// Re-export all configuration types
pub use gateway::*;
pub use gemini::*;
pub use logging::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default Gemini generateContent endpoint, ready for the key to be appended
pub fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key="
        .to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
