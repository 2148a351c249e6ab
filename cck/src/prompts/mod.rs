//! Prompt templates for the three LLM-backed review stages
//!
//! Templates are Handlebars files embedded at build time, with an optional
//! user override directory (`.clausecheck/prompts/`) checked first.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

pub mod embedded;

/// System prompt for the clause classification stage
pub const CLASSIFY_SYSTEM: &str = "You are a legal contract analyst. You label contract clauses \
     with short legal category labels such as NDA, Termination, or Payment Terms. \
     Respond with the label only.";

/// System prompt for the risk assessment stage
pub const RISK_SYSTEM: &str = "You are a legal risk reviewer. You assess contract clauses for \
     risk to the party reviewing the contract, concisely and without hedging.";

/// System prompt for the contract summary stage
pub const SUMMARIZE_SYSTEM: &str =
    "You are a legal contract analyst. You explain contracts in plain language for non-lawyers.";

/// Template context for the classification prompt
#[derive(Debug, Serialize)]
pub struct ClauseContext<'a> {
    /// Verbatim clause text
    pub clause: &'a str,
}

/// Template context for the risk assessment prompt
#[derive(Debug, Serialize)]
pub struct RiskContext<'a> {
    /// Label assigned by the classifier
    pub label: &'a str,
    /// Verbatim clause text
    pub clause: &'a str,
}

/// Template context for the summary prompt
#[derive(Debug, Serialize)]
pub struct ContractContext<'a> {
    /// Full raw contract text
    pub contract: &'a str,
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (e.g., `.clausecheck/prompts/`)
    user_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader rooted at the given directory
    ///
    /// Overrides are read from `<root>/.clausecheck/prompts/{name}.pmt`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        debug!(?root, "PromptLoader::new: called");
        let user_dir = root.join(".clausecheck/prompts");

        let user_dir_exists = user_dir.exists();
        if user_dir_exists {
            debug!(?user_dir, "PromptLoader::new: user override directory found");
        } else {
            debug!("PromptLoader::new: no user override directory");
        }

        Self {
            hbs: Handlebars::new(),
            user_dir: if user_dir_exists { Some(user_dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Handlebars::new(),
            user_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `.clausecheck/prompts/{name}.pmt`
    /// 2. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found in user override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            }
            debug!(?path, "PromptLoader::load_template: not found in user override");
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "PromptLoader::load_template: found in embedded");
            return Ok(content.to_string());
        }

        debug!(%name, "PromptLoader::load_template: not found anywhere");
        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        debug!(%template_name, "PromptLoader::render: called");
        let template = self.load_template(template_name)?;
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_classify_embeds_clause_verbatim() {
        let loader = PromptLoader::embedded_only();
        let clause = "The licensee shall indemnify the licensor against all claims.";
        let prompt = loader.render("classify", &ClauseContext { clause }).unwrap();
        assert!(prompt.contains(clause));
        assert!(prompt.contains("category label"));
    }

    #[test]
    fn test_render_does_not_html_escape() {
        let loader = PromptLoader::embedded_only();
        let clause = "Payment of \"fees\" & interest at <5%>.";
        let prompt = loader.render("classify", &ClauseContext { clause }).unwrap();
        assert!(prompt.contains(clause));
        assert!(!prompt.contains("&amp;"));
    }

    #[test]
    fn test_render_risk_embeds_label_and_clause() {
        let loader = PromptLoader::embedded_only();
        let prompt = loader
            .render(
                "risk",
                &RiskContext {
                    label: "Payment Terms",
                    clause: "Payment shall be made quarterly.",
                },
            )
            .unwrap();
        assert!(prompt.contains("Payment Terms"));
        assert!(prompt.contains("Payment shall be made quarterly."));
    }

    #[test]
    fn test_render_unknown_template() {
        let loader = PromptLoader::embedded_only();
        let result = loader.render("nonexistent-template", &ContractContext { contract: "" });
        assert!(result.is_err());
    }

    #[test]
    fn test_user_override_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        let override_dir = dir.path().join(".clausecheck/prompts");
        std::fs::create_dir_all(&override_dir).unwrap();
        std::fs::write(override_dir.join("classify.pmt"), "Custom: {{{clause}}}").unwrap();

        let loader = PromptLoader::new(dir.path());
        let prompt = loader.render("classify", &ClauseContext { clause: "some clause" }).unwrap();
        assert_eq!(prompt, "Custom: some clause");
    }
}
