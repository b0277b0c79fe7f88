//! Research assistant pipeline
//!
//! A request names an operation (`summarize` or `suggest`) and carries some
//! text. The pipeline turns it into a Gemini prompt, makes one
//! generateContent call, and pulls the generated text out of the response.
//!
//! Two failure regimes are kept apart:
//! - unknown operations and transport failures are returned as
//!   [`ResearchError`];
//! - an unexpected response shape is folded into a sentinel string by
//!   [`extract_text`] and never fails the request.

pub mod client;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod service;
pub mod types;

pub use client::{GeminiClient, InferenceBackend};
pub use envelope::{GenerateContentRequest, GenerateContentResponse};
pub use error::{ResearchError, ResearchResult};
pub use extract::{Extraction, NO_CONTENT_SENTINEL, PARSE_ERROR_PREFIX, extract_text};
pub use prompt::{SUGGEST_PREFIX, SUMMARIZE_PREFIX, build_prompt};
pub use service::ResearchService;
pub use types::{Operation, ResearchRequest};
