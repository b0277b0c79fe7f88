//! Error handling utilities
//!
//! Gateway-level error type, its HTTP mapping, and the conversion from
//! research pipeline failures.

pub mod error;

// Re-export commonly used types
pub use error::*;
