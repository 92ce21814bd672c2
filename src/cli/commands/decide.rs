//! `herald decide`: run one scoring pass over the promotion queue.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use crate::application::DecisionPass;
use crate::cli::display::{colorize_action, list_table, output, CommandOutput};
use crate::domain::models::decision::DecisionsDocument;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::store::FsDocumentStore;

#[derive(Args, Debug)]
pub struct DecideArgs {
    /// Compute and print decisions without writing the decisions document
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, serde::Serialize)]
struct DecideOutput {
    #[serde(flatten)]
    document: DecisionsDocument,
    dry_run: bool,
}

impl CommandOutput for DecideOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["slug", "action", "score"]);
        for decision in &self.document.decisions {
            table.add_row(vec![
                decision.slug.clone(),
                colorize_action(decision.action.as_str()),
                decision.score.to_string(),
            ]);
        }

        let budget = &self.document.budget;
        let mut lines = vec![
            format!(
                "Week budget: {} promotion(s) (tier {}, {:.1} min headroom)",
                budget.items_allowed, budget.tier, budget.headroom
            ),
            table.to_string(),
        ];

        for warning in &self.document.warnings {
            lines.push(format!("{} {warning}", console::style("warning:").yellow()));
        }
        if self.dry_run {
            lines.push("dry run: decisions document not written".to_string());
        }
        lines.join("\n")
    }
}

pub async fn execute(args: DecideArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load()?;
    let store = Arc::new(FsDocumentStore::new(config.documents.clone(), "."));

    let pass = DecisionPass::new(store, config);
    let document = pass.run(Utc::now().date_naive(), args.dry_run).await?;

    output(
        &DecideOutput {
            document,
            dry_run: args.dry_run,
        },
        json_mode,
    );
    Ok(())
}
