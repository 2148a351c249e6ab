//! The four-stage contract review pipeline
//!
//! Extract -> Classify -> AssessRisks -> Summarize, threading a single
//! [`ReviewState`] through the stages. The extractor is pure; the other
//! three stages call the LLM service.

pub mod cancel;
pub mod classify;
pub mod error;
pub mod extract;
pub mod risk;
pub mod runner;
pub mod state;
pub mod summarize;

pub use cancel::CancelToken;
pub use classify::classify_clauses;
pub use error::{PipelineError, PipelineFailure};
pub use extract::extract_clauses;
pub use risk::{assess_risks, is_no_risk};
pub use runner::{ReviewPipeline, Stage};
pub use state::{Classification, ReviewState};
pub use summarize::summarize_contract;
