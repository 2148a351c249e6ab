//! clausecheck - LLM-backed contract clause review
//!
//! Analyzes a plain-text legal contract by splitting it into clauses,
//! classifying each clause, flagging risky clauses, and producing a
//! plain-language summary, with an LLM as the text-understanding engine.
//!
//! # Core Concepts
//!
//! - **Linear pipeline**: four stages in fixed order, no branching or retries
//! - **Single state record**: each stage populates exactly one field of
//!   [`pipeline::ReviewState`], committed only on full stage success
//! - **Free-form LLM boundary**: prompt in, raw text out; all parsing happens
//!   on the caller side
//! - **Sequential by design**: per-clause requests are independent but issued
//!   one at a time, preserving clause order in every output sequence
//!
//! # Modules
//!
//! - [`pipeline`] - The four-stage review pipeline and its runner
//! - [`llm`] - LLM client trait, Anthropic and OpenAI implementations
//! - [`prompts`] - Handlebars prompt templates for the LLM-backed stages
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod prompts;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use llm::{
    AnthropicClient, CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient, TokenUsage,
    create_client,
};
pub use pipeline::{
    CancelToken, Classification, PipelineError, PipelineFailure, ReviewPipeline, ReviewState, Stage, extract_clauses,
    is_no_risk,
};
pub use prompts::{ClauseContext, ContractContext, PromptLoader, RiskContext};
