//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Clause classification prompt
pub const CLASSIFY: &str = include_str!("../../prompts/classify.pmt");

/// Clause risk assessment prompt
pub const RISK: &str = include_str!("../../prompts/risk.pmt");

/// Whole-contract summary prompt
pub const SUMMARIZE: &str = include_str!("../../prompts/summarize.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "classify" => {
            debug!("get_embedded: matched classify");
            Some(CLASSIFY)
        }
        "risk" => {
            debug!("get_embedded: matched risk");
            Some(RISK)
        }
        "summarize" => {
            debug!("get_embedded: matched summarize");
            Some(SUMMARIZE)
        }
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}
