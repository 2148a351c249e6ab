//! Contract review state
//!
//! The single record threaded through all four pipeline stages. Each stage
//! populates exactly one field; a stage that fails leaves its field empty
//! (stage output is committed only on full stage success).

use serde::Serialize;
use tracing::debug;

/// A clause paired with the legal category label assigned by the classifier
///
/// The clause text is copied verbatim from the extracted clause so downstream
/// consumers can trace a label back to its source without indexing into the
/// clause list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub clause: String,
    pub label: String,
}

/// The mutable record threaded through the review pipeline
///
/// Fields are populated strictly in pipeline order: `contract` at creation,
/// then `clauses`, `classifications`, `risks`, and `summary`. No stage reads
/// a later stage's field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewState {
    /// Raw contract text, set once at creation and immutable thereafter
    pub contract: String,

    /// Extracted clauses, in source order
    pub clauses: Vec<String>,

    /// One entry per clause, same order
    pub classifications: Vec<Classification>,

    /// Flagged risks, formatted as "<label>: <risk text>"; clauses assessed
    /// as risk-free are omitted, so this holds between 0 and N entries
    pub risks: Vec<String>,

    /// Plain-language summary of the whole contract
    pub summary: Option<String>,
}

impl ReviewState {
    /// Create a fresh state for one review run
    pub fn new(contract: impl Into<String>) -> Self {
        let contract = contract.into();
        debug!(contract_len = contract.len(), "ReviewState::new: called");
        Self {
            contract,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_only_has_contract() {
        let state = ReviewState::new("some contract text");
        assert_eq!(state.contract, "some contract text");
        assert!(state.clauses.is_empty());
        assert!(state.classifications.is_empty());
        assert!(state.risks.is_empty());
        assert!(state.summary.is_none());
    }

    #[test]
    fn test_state_serializes_to_json() {
        let state = ReviewState {
            contract: "text".to_string(),
            clauses: vec!["a clause".to_string()],
            classifications: vec![Classification {
                clause: "a clause".to_string(),
                label: "NDA".to_string(),
            }],
            risks: vec!["NDA: overly broad".to_string()],
            summary: Some("short summary".to_string()),
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["clauses"][0], "a clause");
        assert_eq!(json["classifications"][0]["label"], "NDA");
        assert_eq!(json["risks"][0], "NDA: overly broad");
        assert_eq!(json["summary"], "short summary");
    }
}
