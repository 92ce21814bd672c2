//! `herald govern`: translate recommendations into governed patches.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use crate::application::GovernancePass;
use crate::cli::display::{list_table, output, CommandOutput};
use crate::domain::models::patch::PatchPlan;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::store::FsDocumentStore;

#[derive(Args, Debug)]
pub struct GovernArgs {
    /// Build and print the patch plan without applying or auditing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, serde::Serialize)]
struct GovernOutput {
    #[serde(flatten)]
    plan: PatchPlan,
    audit_run_id: Option<String>,
    dry_run: bool,
}

impl CommandOutput for GovernOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();

        if self.plan.patches.is_empty() {
            lines.push("No patches approved this run.".to_string());
        } else {
            let mut table = list_table(&["slug", "target", "description"]);
            for patch in &self.plan.patches {
                table.add_row(vec![
                    patch.slug.clone(),
                    patch.target.clone(),
                    patch.description.clone(),
                ]);
            }
            lines.push(format!("{} patch(es) approved:", self.plan.patches.len()));
            lines.push(table.to_string());
        }

        for note in &self.plan.frozen_actions {
            lines.push(format!(
                "{} {}",
                console::style("frozen:").cyan(),
                note.note
            ));
        }
        for note in &self.plan.advisory_notes {
            lines.push(format!(
                "{} {}",
                console::style("advisory:").dim(),
                note.note
            ));
        }
        for risk in &self.plan.risk_notes {
            lines.push(format!("{} {risk}", console::style("risk:").yellow()));
        }

        match (&self.audit_run_id, self.dry_run) {
            (Some(run_id), _) => lines.push(format!("audit artifact persisted (run {run_id})")),
            (None, true) => lines.push("dry run: nothing applied".to_string()),
            (None, false) => {}
        }
        lines.join("\n")
    }
}

pub async fn execute(args: GovernArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load()?;
    let store = Arc::new(FsDocumentStore::new(config.documents.clone(), "."));

    let pass = GovernancePass::new(store, config);
    let outcome = pass.run(args.dry_run).await?;

    output(
        &GovernOutput {
            audit_run_id: outcome
                .artifact
                .as_ref()
                .map(|artifact| artifact.run_id.to_string()),
            plan: outcome.plan,
            dry_run: args.dry_run,
        },
        json_mode,
    );
    Ok(())
}
