//! Pipeline error types

use thiserror::Error;

use super::runner::Stage;
use super::state::ReviewState;
use crate::llm::LlmError;

/// Errors that can abort a pipeline stage
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed contract text given to the extractor
    #[error("invalid contract input: {0}")]
    InvalidInput(String),

    /// A prompt template failed to load or render
    #[error("prompt rendering failed: {0}")]
    Prompt(String),

    /// The LLM service returned an error, could not be reached, or timed out
    #[error(transparent)]
    Model(#[from] LlmError),

    /// The review run was cancelled between LLM requests
    #[error("review cancelled")]
    Cancelled,
}

/// A failed review run: the stage that failed, the error, and the state as
/// populated by the stages that completed before it
///
/// No stage is ever partially rolled back - the carried state reflects only
/// fully completed stages, so the failed stage's own output field is empty.
#[derive(Debug, Error)]
#[error("contract review failed at {stage} stage: {error}")]
pub struct PipelineFailure {
    /// Stage that failed
    pub stage: Stage,

    /// What went wrong
    #[source]
    pub error: PipelineError,

    /// State accumulated by prior stages
    pub state: ReviewState,
}
