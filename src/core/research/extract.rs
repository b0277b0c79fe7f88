//! Response extraction
//!
//! Pulls the generated text out of a raw Gemini response body. Extraction is
//! total: every failure becomes one of two sentinel strings, so a provider
//! returning an unexpected shape never aborts the caller.

use std::fmt;

use serde_json::Value;
use tracing::warn;

use super::envelope::GenerateContentResponse;

/// Returned when the response decodes but carries no usable text
pub const NO_CONTENT_SENTINEL: &str = "No content found in response";

/// Prefix of the string returned when the body cannot be decoded
pub const PARSE_ERROR_PREFIX: &str = "Error Parsing: ";

/// Outcome of inspecting a response body
///
/// Each way the nested structure can come up short is its own variant, even
/// though several of them render to the same sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Text of the first part of the first candidate
    Text(String),
    /// The first part exists but has no `text` field
    MissingText,
    /// `candidates` is absent or null
    MissingCandidates,
    /// `candidates` is an empty array
    EmptyCandidates,
    /// The first candidate has no `content`
    MissingContent,
    /// `content.parts` is absent or null
    MissingParts,
    /// `content.parts` is an empty array
    EmptyParts,
    /// The body is not valid JSON or does not match the envelope
    ParseFailure(String),
}

impl Extraction {
    /// Inspect a raw response body
    pub fn from_body(raw_body: &str) -> Self {
        let value: Value = match serde_json::from_str(raw_body) {
            Ok(value) => value,
            Err(e) => return Extraction::ParseFailure(e.to_string()),
        };
        if let Err(message) = check_object_levels(&value) {
            return Extraction::ParseFailure(message);
        }

        match serde_json::from_value::<GenerateContentResponse>(value) {
            Ok(response) => Self::from_response(response),
            Err(e) => Extraction::ParseFailure(e.to_string()),
        }
    }

    /// Inspect a decoded response; always the first candidate and first part
    pub fn from_response(response: GenerateContentResponse) -> Self {
        let Some(candidates) = response.candidates else {
            return Extraction::MissingCandidates;
        };
        let Some(candidate) = candidates.into_iter().next() else {
            return Extraction::EmptyCandidates;
        };
        let Some(content) = candidate.content else {
            return Extraction::MissingContent;
        };
        let Some(parts) = content.parts else {
            return Extraction::MissingParts;
        };
        let Some(part) = parts.into_iter().next() else {
            return Extraction::EmptyParts;
        };

        match part.text {
            Some(text) => Extraction::Text(text),
            None => Extraction::MissingText,
        }
    }

    /// Whether generated text was found
    pub fn is_text(&self) -> bool {
        matches!(self, Extraction::Text(_))
    }

    /// Render to the outward string: the text or a sentinel
    pub fn into_text(self) -> String {
        match self {
            Extraction::Text(text) => text,
            // A part without text yields an empty result, not a sentinel.
            Extraction::MissingText => String::new(),
            Extraction::MissingCandidates
            | Extraction::EmptyCandidates
            | Extraction::MissingContent
            | Extraction::MissingParts
            | Extraction::EmptyParts => NO_CONTENT_SENTINEL.to_string(),
            Extraction::ParseFailure(message) => format!("{}{}", PARSE_ERROR_PREFIX, message),
        }
    }
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extraction::Text(text) => f.write_str(text),
            Extraction::MissingText => Ok(()),
            Extraction::ParseFailure(message) => write!(f, "{}{}", PARSE_ERROR_PREFIX, message),
            _ => f.write_str(NO_CONTENT_SENTINEL),
        }
    }
}

/// Reject arrays where the envelope has an object
///
/// Derived `Deserialize` impls also accept a sequence for a struct, which
/// would let `[]` or `[[...]]` decode as a response.
fn check_object_levels(value: &Value) -> Result<(), String> {
    fn expect_object(value: &Value, at: &str) -> Result<(), String> {
        if value.is_array() {
            Err(format!("invalid type: sequence, expected an object at {}", at))
        } else {
            Ok(())
        }
    }

    if !value.is_object() {
        return Err("invalid type: expected a JSON object at the top level".to_string());
    }

    let candidates = value.get("candidates").and_then(Value::as_array);
    for (i, candidate) in candidates.into_iter().flatten().enumerate() {
        expect_object(candidate, &format!("candidates[{}]", i))?;
        let Some(content) = candidate.get("content") else {
            continue;
        };
        expect_object(content, &format!("candidates[{}].content", i))?;

        let parts = content.get("parts").and_then(Value::as_array);
        for (j, part) in parts.into_iter().flatten().enumerate() {
            expect_object(part, &format!("candidates[{}].content.parts[{}]", i, j))?;
        }
    }

    Ok(())
}

/// Extract the generated text from a raw response body
///
/// Never fails. Returns the text, [`NO_CONTENT_SENTINEL`], or a string
/// starting with [`PARSE_ERROR_PREFIX`].
pub fn extract_text(raw_body: &str) -> String {
    let extraction = Extraction::from_body(raw_body);
    if !extraction.is_text() {
        warn!(outcome = ?extraction, "Gemini response carried no usable text");
    }
    extraction.into_text()
}
