//! Provider response bodies
//!
//! Each fixture is a raw body exactly as the provider would send it.

use serde_json::{Value, json};

/// A well-formed response with a single candidate carrying `text`
pub fn single_text(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

/// A response with several candidates and parts; only the first counts
pub fn multiple_candidates() -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": "first" }, { "text": "second part" } ] } },
            { "content": { "parts": [ { "text": "other candidate" } ] } }
        ]
    })
}

/// A response with an empty candidate list
pub fn no_candidates() -> Value {
    json!({ "candidates": [] })
}

/// A response whose first candidate has no content
pub fn candidate_without_content() -> Value {
    json!({ "candidates": [ { "finishReason": "SAFETY" } ] })
}

/// A response whose content has an empty part list
pub fn empty_parts() -> Value {
    json!({ "candidates": [ { "content": { "parts": [] } } ] })
}

/// The request envelope the client must send for `prompt`
pub fn request_envelope(prompt: &str) -> Value {
    json!({ "contents": [ { "parts": [ { "text": prompt } ] } ] })
}
