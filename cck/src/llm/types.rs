//! LLM request/response types
//!
//! The completion contract is deliberately free-form: a prompt goes in, raw
//! text comes out. All parsing (trimming, label extraction) happens on the
//! caller side.

use tracing::debug;

use super::LlmError;

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt for the stage issuing the request
    pub system_prompt: String,

    /// User prompt (rendered from a Handlebars template)
    pub prompt: String,

    /// Max tokens for response (from config)
    pub max_tokens: u32,
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Raw completion text (if any)
    pub content: Option<String>,

    /// Token usage for cost tracking
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// Get the trimmed completion text, rejecting empty completions
    pub fn text(&self) -> Result<String, LlmError> {
        debug!("CompletionResponse::text: called");
        match self.content.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => {
                debug!("CompletionResponse::text: empty completion");
                Err(LlmError::InvalidResponse("empty completion".to_string()))
            }
        }
    }
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
