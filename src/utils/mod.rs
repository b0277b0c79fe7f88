//! Utility modules for the research gateway
//!
//! - **error**: gateway error type and HTTP mapping
//! - **logging**: tracing setup and secret redaction

pub mod error;
pub mod logging;

pub use logging::sanitization;

/// Truncate string to at most `max_chars` characters, with an ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
