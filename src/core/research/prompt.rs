//! Prompt construction
//!
//! Maps an operation and its content to the instruction text sent to the
//! model. The content is appended verbatim: no trimming, truncation, or
//! escaping.

use super::error::ResearchResult;
use super::types::{Operation, ResearchRequest};

/// Instruction prefix for [`Operation::Summarize`]
pub const SUMMARIZE_PREFIX: &str =
    "Provide a clear and concise summary of the following text in a few sentences:\n\n";

/// Instruction prefix for [`Operation::Suggest`]
pub const SUGGEST_PREFIX: &str = "Based on the following content: suggest related topics and further reading. Format the response with clear headings and bullet points:\n\n";

impl Operation {
    /// Instruction prefix placed before the content
    pub fn prompt_prefix(&self) -> &'static str {
        match self {
            Operation::Summarize => SUMMARIZE_PREFIX,
            Operation::Suggest => SUGGEST_PREFIX,
        }
    }

    /// Build the full prompt for `content`
    pub fn prompt_for(&self, content: &str) -> String {
        let prefix = self.prompt_prefix();
        let mut prompt = String::with_capacity(prefix.len() + content.len());
        prompt.push_str(prefix);
        prompt.push_str(content);
        prompt
    }
}

/// Build the prompt for a raw request
///
/// Fails with `InvalidOperation` when the operation is not recognized; no
/// prompt is produced in that case.
pub fn build_prompt(request: &ResearchRequest) -> ResearchResult<String> {
    let operation = request.operation()?;
    Ok(operation.prompt_for(&request.content))
}
