//! Gemini wire envelopes
//!
//! Request shape: `{"contents":[{"parts":[{"text":"..."}]}]}`.
//! Response shape: `{"candidates":[{"content":{"parts":[{"text":"..."}]}}]}`.
//!
//! Every response level is optional so that a missing field and an empty
//! array stay distinguishable. Unknown fields (`finishReason`,
//! `usageMetadata`, ...) are ignored.

use serde::{Deserialize, Serialize};

/// Google API request structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    /// Wrap a prompt as the single content with a single part
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// Google API response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}
