//! Pipeline runner
//!
//! Executes the four review stages in fixed order, threading the state
//! between them. The topology never branches, so it is expressed as an
//! explicit linear state machine rather than a general graph: each
//! transition fires on successful completion of its stage, and any stage
//! error terminates the run carrying the error plus the state accumulated
//! by the stages that completed before it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::cancel::CancelToken;
use super::classify::classify_clauses;
use super::error::{PipelineError, PipelineFailure};
use super::extract::extract_clauses;
use super::risk::assess_risks;
use super::state::ReviewState;
use super::summarize::summarize_contract;
use crate::llm::LlmClient;
use crate::prompts::PromptLoader;

/// The four review stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extract,
    Classify,
    AssessRisks,
    Summarize,
}

impl Stage {
    /// Fixed stage sequence, exposed for callers that want to render the
    /// pipeline topology
    pub const SEQUENCE: [Stage; 4] = [Stage::Extract, Stage::Classify, Stage::AssessRisks, Stage::Summarize];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Classify => "classify",
            Stage::AssessRisks => "assess-risks",
            Stage::Summarize => "summarize",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run progress through the linear pipeline
///
/// Start -> Extracted -> Classified -> RisksAssessed -> Summarized. No
/// re-entry, no skipping, no conditional routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunProgress {
    Start,
    Extracted,
    Classified,
    RisksAssessed,
    Summarized,
}

impl RunProgress {
    /// The stage whose completion triggers the next transition, if any
    fn next_stage(self) -> Option<Stage> {
        match self {
            RunProgress::Start => Some(Stage::Extract),
            RunProgress::Extracted => Some(Stage::Classify),
            RunProgress::Classified => Some(Stage::AssessRisks),
            RunProgress::RisksAssessed => Some(Stage::Summarize),
            RunProgress::Summarized => None,
        }
    }

    fn advance(self) -> RunProgress {
        match self {
            RunProgress::Start => RunProgress::Extracted,
            RunProgress::Extracted => RunProgress::Classified,
            RunProgress::Classified => RunProgress::RisksAssessed,
            RunProgress::RisksAssessed => RunProgress::Summarized,
            RunProgress::Summarized => RunProgress::Summarized,
        }
    }
}

/// Executes a full contract review against a configured LLM client
pub struct ReviewPipeline {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    max_tokens: u32,
}

impl ReviewPipeline {
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader, max_tokens: u32) -> Self {
        debug!(%max_tokens, "ReviewPipeline::new: called");
        Self {
            llm,
            prompts,
            max_tokens,
        }
    }

    /// Stage names in execution order (for topology display)
    pub fn stage_names() -> Vec<&'static str> {
        Stage::SEQUENCE.iter().map(Stage::name).collect()
    }

    /// Run the full review over one contract
    ///
    /// Returns the fully populated state, or a failure carrying the error and
    /// the state as left by the stages that completed.
    pub async fn run(
        &self,
        contract: impl Into<String>,
        cancel: &CancelToken,
    ) -> Result<ReviewState, PipelineFailure> {
        let mut state = ReviewState::new(contract);
        let mut progress = RunProgress::Start;
        info!(contract_len = state.contract.len(), "run: starting contract review");

        while let Some(stage) = progress.next_stage() {
            debug!(%stage, "run: entering stage");
            if let Err(error) = self.run_stage(stage, &mut state, cancel).await {
                warn!(%stage, %error, "run: stage failed, terminating run");
                return Err(PipelineFailure { stage, error, state });
            }
            progress = progress.advance();
            info!(%stage, "run: stage complete");
        }

        info!(
            clauses = state.clauses.len(),
            risks = state.risks.len(),
            "run: review complete"
        );
        Ok(state)
    }

    /// Execute one stage, committing its output to the state only on success
    async fn run_stage(
        &self,
        stage: Stage,
        state: &mut ReviewState,
        cancel: &CancelToken,
    ) -> Result<(), PipelineError> {
        match stage {
            Stage::Extract => {
                state.clauses = extract_clauses(&state.contract)?;
            }
            Stage::Classify => {
                state.classifications =
                    classify_clauses(&self.llm, &self.prompts, &state.clauses, self.max_tokens, cancel).await?;
            }
            Stage::AssessRisks => {
                state.risks =
                    assess_risks(&self.llm, &self.prompts, &state.classifications, self.max_tokens, cancel).await?;
            }
            Stage::Summarize => {
                state.summary =
                    Some(summarize_contract(&self.llm, &self.prompts, &state.contract, self.max_tokens, cancel).await?);
            }
        }
        Ok(())
    }
}
