//! `herald init`: create project-local configuration and seed documents.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;

use crate::cli::display::{output, CommandOutput};
use crate::domain::models::config::Config;
use crate::domain::models::governance::Governance;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, serde::Serialize)]
struct InitOutput {
    created: Vec<String>,
    skipped: Vec<String>,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();
        for path in &self.created {
            lines.push(format!("{} {path}", console::style("created:").green()));
        }
        for path in &self.skipped {
            lines.push(format!(
                "{} {path} (already exists)",
                console::style("skipped:").dim()
            ));
        }
        lines.join("\n")
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    tokio::fs::create_dir_all(".herald")
        .await
        .context("creating .herald directory")?;

    let mut result = InitOutput {
        created: Vec::new(),
        skipped: Vec::new(),
    };

    let config_yaml =
        serde_yaml::to_string(&Config::default()).context("serializing default config")?;
    write_seed(".herald/config.yaml", &config_yaml, args.force, &mut result).await?;

    let governance_json = serde_json::to_string_pretty(&Governance::default())
        .context("serializing default governance")?;
    write_seed(
        ".herald/governance.json",
        &governance_json,
        args.force,
        &mut result,
    )
    .await?;

    output(&result, json_mode);
    Ok(())
}

async fn write_seed(
    path: &str,
    contents: &str,
    force: bool,
    result: &mut InitOutput,
) -> Result<()> {
    if Path::new(path).exists() && !force {
        result.skipped.push(path.to_string());
        return Ok(());
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {path}"))?;
    result.created.push(path.to_string());
    Ok(())
}
