//! Contract summary stage
//!
//! Exactly one LLM request over the full raw contract text, regardless of
//! contract length or clause count. The summarizer deliberately reads the
//! raw text rather than the extracted clauses, and runs even when no clauses
//! were extracted.

use std::sync::Arc;

use tracing::debug;

use super::cancel::CancelToken;
use super::error::PipelineError;
use crate::llm::{CompletionRequest, LlmClient};
use crate::prompts::{ContractContext, PromptLoader, SUMMARIZE_SYSTEM};

/// Produce a plain-language summary of the whole contract
pub async fn summarize_contract(
    llm: &Arc<dyn LlmClient>,
    prompts: &PromptLoader,
    contract: &str,
    max_tokens: u32,
    cancel: &CancelToken,
) -> Result<String, PipelineError> {
    debug!(contract_len = contract.len(), "summarize_contract: called");
    if cancel.is_cancelled() {
        debug!("summarize_contract: cancelled before request");
        return Err(PipelineError::Cancelled);
    }

    let prompt = prompts
        .render("summarize", &ContractContext { contract })
        .map_err(|e| PipelineError::Prompt(e.to_string()))?;

    let request = CompletionRequest {
        system_prompt: SUMMARIZE_SYSTEM.to_string(),
        prompt,
        max_tokens,
    };

    let response = llm.complete(request).await?;
    let summary = response.text()?;
    debug!(summary_len = summary.len(), "summarize_contract: stage complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::{MockLlmClient, MockReply};

    #[tokio::test]
    async fn test_summarize_single_request() {
        let mock = Arc::new(MockLlmClient::new(vec![MockReply::text(
            "  A two-year software license between Party A and Party B.\n",
        )]));
        let llm: Arc<dyn LlmClient> = mock.clone();
        let contract = "line one\nline two\nline three\n";

        let summary = summarize_contract(
            &llm,
            &PromptLoader::embedded_only(),
            contract,
            256,
            &CancelToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(summary, "A two-year software license between Party A and Party B.");
        assert_eq!(mock.call_count(), 1);

        let requests = mock.requests();
        assert!(requests[0].prompt.contains(contract));
        assert_eq!(requests[0].system_prompt, SUMMARIZE_SYSTEM);
    }

    #[tokio::test]
    async fn test_summarize_empty_completion_is_model_error() {
        let llm: Arc<dyn LlmClient> = Arc::new(MockLlmClient::new(vec![MockReply::text("")]));

        let result = summarize_contract(
            &llm,
            &PromptLoader::embedded_only(),
            "some text",
            256,
            &CancelToken::new(),
        )
        .await;

        assert!(matches!(result, Err(PipelineError::Model(_))));
    }

    #[tokio::test]
    async fn test_summarize_respects_cancellation() {
        let mock = Arc::new(MockLlmClient::new(vec![MockReply::text("summary")]));
        let llm: Arc<dyn LlmClient> = mock.clone();
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = summarize_contract(&llm, &PromptLoader::embedded_only(), "text", 256, &cancel).await;

        assert!(matches!(result, Err(PipelineError::Cancelled)));
        assert_eq!(mock.call_count(), 0);
    }
}
