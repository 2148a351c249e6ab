//! Risk assessment stage
//!
//! One LLM request per classified clause, sequential. This is a filter-map:
//! the output is an order-preserving subset of the input, between 0 and N
//! entries, each formatted as `"<label>: <risk text>"`.

use std::sync::Arc;

use tracing::debug;

use super::cancel::CancelToken;
use super::error::PipelineError;
use super::state::Classification;
use crate::llm::{CompletionRequest, LlmClient};
use crate::prompts::{PromptLoader, RISK_SYSTEM, RiskContext};

/// Decide whether a trimmed risk assessment means "risk-free"
///
/// The sole decision rule: the lowercased assessment contains the literal
/// substring "no risk". Known fragility: an assessment that merely mentions
/// the phrase (e.g. "there is no risk of X, but...") is treated as risk-free
/// too. Kept isolated here so it can be swapped for a structured yes/no field
/// if the LLM interface ever returns structured output.
pub fn is_no_risk(assessment: &str) -> bool {
    assessment.to_lowercase().contains("no risk")
}

/// Assess each classified clause for risk, keeping only risky ones
pub async fn assess_risks(
    llm: &Arc<dyn LlmClient>,
    prompts: &PromptLoader,
    classifications: &[Classification],
    max_tokens: u32,
    cancel: &CancelToken,
) -> Result<Vec<String>, PipelineError> {
    debug!(classification_count = classifications.len(), "assess_risks: called");
    let mut risks = Vec::new();

    for (idx, entry) in classifications.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!(%idx, "assess_risks: cancelled before request");
            return Err(PipelineError::Cancelled);
        }

        let prompt = prompts
            .render(
                "risk",
                &RiskContext {
                    label: &entry.label,
                    clause: &entry.clause,
                },
            )
            .map_err(|e| PipelineError::Prompt(e.to_string()))?;

        let request = CompletionRequest {
            system_prompt: RISK_SYSTEM.to_string(),
            prompt,
            max_tokens,
        };

        let response = llm.complete(request).await?;
        let assessment = response.text()?;

        if is_no_risk(&assessment) {
            debug!(%idx, label = %entry.label, "assess_risks: clause assessed risk-free");
            continue;
        }

        debug!(%idx, label = %entry.label, "assess_risks: clause flagged");
        risks.push(format!("{}: {}", entry.label, assessment));
    }

    debug!(risk_count = risks.len(), "assess_risks: stage complete");
    Ok(risks)
}
