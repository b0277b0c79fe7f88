//! Common test utilities for research-assistant
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::provider::MockGemini;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let gemini = MockGemini::start().await;
//!     let settings = gemini.settings();
//!     // ...
//! }
//! ```

pub mod fixtures;

pub use provider::{MockGemini, TEST_API_KEY};
