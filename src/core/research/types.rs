//! Research request types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ResearchError;

/// An inbound request: an operation name and the text to process
///
/// The operation is kept as the raw string the caller sent. It is decoded
/// into [`Operation`] when the prompt is built, which is where an unknown
/// value turns into [`ResearchError::InvalidOperation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    /// Requested operation, e.g. `"summarize"`
    pub operation: String,
    /// Arbitrary, possibly empty, text
    #[serde(default)]
    pub content: String,
}

impl ResearchRequest {
    /// Create a new request
    pub fn new(operation: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            content: content.into(),
        }
    }

    /// Decode the operation name
    pub fn operation(&self) -> Result<Operation, ResearchError> {
        self.operation.parse()
    }
}

/// Supported research operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Short summary of the content
    Summarize,
    /// Related topics and further reading
    Suggest,
}

impl Operation {
    /// All operations, in declaration order
    pub const ALL: [Operation; 2] = [Operation::Summarize, Operation::Suggest];

    /// Wire name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Suggest => "suggest",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ResearchError;

    // Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarize" => Ok(Operation::Summarize),
            "suggest" => Ok(Operation::Suggest),
            other => Err(ResearchError::invalid_operation(other)),
        }
    }
}
