//! clausecheck - LLM-backed contract clause review
//!
//! CLI entry point: reads a contract, runs the four-stage review pipeline,
//! and prints the result as a text report or JSON.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use clausecheck::cli::{Cli, Command, OutputFormat};
use clausecheck::config::Config;
use clausecheck::llm::create_client;
use clausecheck::pipeline::{CancelToken, ReviewPipeline, ReviewState};
use clausecheck::prompts::PromptLoader;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let level = if let Some(s) = cli_log_level {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        }
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Review { file, format, model } => cmd_review(config, &file, format, model).await,
        Command::Stages => cmd_stages(),
    }
}

/// Read contract text from a file, or stdin when the path is "-"
fn read_contract(file: &Path) -> Result<String> {
    debug!(?file, "read_contract: called");
    let bytes = if file == Path::new("-") {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read contract from stdin")?;
        buffer
    } else {
        fs::read(file).context(format!("Failed to read contract file {}", file.display()))?
    };

    String::from_utf8(bytes).map_err(|_| eyre!("Contract input is not valid UTF-8 text"))
}

async fn cmd_review(mut config: Config, file: &Path, format: OutputFormat, model: Option<String>) -> Result<()> {
    debug!(?file, %format, ?model, "cmd_review: called");
    if let Some(model) = model {
        config.llm.model = model;
    }
    config.validate()?;

    let contract = read_contract(file)?;
    info!(contract_len = contract.len(), "cmd_review: contract loaded");

    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    let prompts = PromptLoader::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let pipeline = ReviewPipeline::new(llm, prompts, config.llm.max_tokens);

    // Ctrl-C aborts between per-clause requests rather than mid-run
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    match pipeline.run(contract, &cancel).await {
        Ok(state) => {
            print_report(&state, format)?;
            Ok(())
        }
        Err(failure) => {
            eprintln!(
                "{} {} clauses extracted, {} classified, {} risks flagged before the failure",
                "partial state:".yellow(),
                failure.state.clauses.len(),
                failure.state.classifications.len(),
                failure.state.risks.len(),
            );
            Err(eyre::Report::new(failure))
        }
    }
}

/// Print the fully populated review state
fn print_report(state: &ReviewState, format: OutputFormat) -> Result<()> {
    debug!(%format, "print_report: called");
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(state).context("Failed to serialize review state")?
            );
        }
        OutputFormat::Text => {
            println!("{}", "Contract Review".bold());
            println!();

            if let Some(summary) = &state.summary {
                println!("{}", "Summary".bold().underline());
                println!("{}", summary);
                println!();
            }

            println!("{} ({})", "Clauses".bold().underline(), state.classifications.len());
            for classification in &state.classifications {
                println!("  [{}] {}", classification.label.cyan(), classification.clause);
            }
            println!();

            if state.risks.is_empty() {
                println!("{}", "No risky clauses flagged.".green());
            } else {
                println!("{} ({})", "Risks".bold().underline(), state.risks.len());
                for risk in &state.risks {
                    println!("  {} {}", "!".red().bold(), risk.red());
                }
            }
        }
    }
    Ok(())
}

fn cmd_stages() -> Result<()> {
    debug!("cmd_stages: called");
    println!("{}", "Pipeline stages".bold());
    for (idx, name) in ReviewPipeline::stage_names().iter().enumerate() {
        println!("  {}. {}", idx + 1, name);
    }
    Ok(())
}
