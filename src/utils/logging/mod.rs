//! Logging utilities
//!
//! Tracing subscriber setup and redaction of secrets before they reach a log
//! line.

pub mod sanitization;
pub mod subscriber;

pub use sanitization::{mask_secret, redact_secret, sanitize_log_data};
pub use subscriber::{build_env_filter, init_tracing};
