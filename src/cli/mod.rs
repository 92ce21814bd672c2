//! Command-line interface.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};

/// Promotion-governance engine: deterministic candidate scoring, budgeted
/// ranking, and audited state patches.
#[derive(Parser, Debug)]
#[command(name = "herald", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize project-local configuration and seed documents
    Init(commands::init::InitArgs),
    /// Score queued candidates and write the decisions document
    Decide(commands::decide::DecideArgs),
    /// Translate recommendations into governed patches and apply them
    Govern(commands::govern::GovernArgs),
}

/// Uniform error handler: render the error and exit non-zero.
///
/// Governed outcomes (freezes, exhausted budget, capped patches) are normal
/// results and never reach this path; only real failures do.
pub fn handle_error(err: anyhow::Error, json_mode: bool) {
    if json_mode {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }
    std::process::exit(1);
}
