//! Clause classification stage
//!
//! One LLM request per clause, issued sequentially and in clause order. The
//! output is a strict 1:1 order-preserving map: every clause gets exactly one
//! entry carrying the clause text verbatim plus the trimmed label from the
//! model. An LLM failure on any clause aborts the whole stage - no sentinel
//! labels, no retry.

use std::sync::Arc;

use tracing::debug;

use super::cancel::CancelToken;
use super::error::PipelineError;
use super::state::Classification;
use crate::llm::{CompletionRequest, LlmClient};
use crate::prompts::{CLASSIFY_SYSTEM, ClauseContext, PromptLoader};

/// Label each clause with a legal category via the LLM
pub async fn classify_clauses(
    llm: &Arc<dyn LlmClient>,
    prompts: &PromptLoader,
    clauses: &[String],
    max_tokens: u32,
    cancel: &CancelToken,
) -> Result<Vec<Classification>, PipelineError> {
    debug!(clause_count = clauses.len(), "classify_clauses: called");
    let mut classifications = Vec::with_capacity(clauses.len());

    for (idx, clause) in clauses.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!(%idx, "classify_clauses: cancelled before request");
            return Err(PipelineError::Cancelled);
        }

        let prompt = prompts
            .render("classify", &ClauseContext { clause })
            .map_err(|e| PipelineError::Prompt(e.to_string()))?;

        let request = CompletionRequest {
            system_prompt: CLASSIFY_SYSTEM.to_string(),
            prompt,
            max_tokens,
        };

        let response = llm.complete(request).await?;
        let label = response.text()?;
        debug!(%idx, %label, "classify_clauses: labeled clause");

        classifications.push(Classification {
            clause: clause.clone(),
            label,
        });
    }

    debug!(
        classification_count = classifications.len(),
        "classify_clauses: stage complete"
    );
    Ok(classifications)
}
