//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `endpoint`: URL checks for the provider endpoint
//! - `config_validators`: validators for the gateway configuration sections
//! - `tests`: test suite for all validators

mod config_validators;
mod endpoint;
mod trait_def;

pub use endpoint::validate_endpoint_url;
pub use trait_def::Validate;

/// Log levels accepted by the configuration
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
