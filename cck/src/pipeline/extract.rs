//! Clause extraction stage
//!
//! Pure string operation, no LLM call: the contract text is split on line
//! boundaries, each candidate line is trimmed, and empty results are dropped.
//! Source order is preserved.

use tracing::debug;

use super::error::PipelineError;

/// Split raw contract text into discrete clause strings
///
/// Deterministic: the same input always yields the same clause sequence.
/// Text containing NUL bytes is rejected as non-text input.
pub fn extract_clauses(contract: &str) -> Result<Vec<String>, PipelineError> {
    debug!(contract_len = contract.len(), "extract_clauses: called");
    if contract.contains('\0') {
        debug!("extract_clauses: contract contains NUL bytes");
        return Err(PipelineError::InvalidInput(
            "contract text contains NUL bytes".to_string(),
        ));
    }

    let clauses: Vec<String> = contract
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(clause_count = clauses.len(), "extract_clauses: extracted clauses");
    Ok(clauses)
}
