//! The governance pass: recommendations → patch plan → applied patches plus
//! one audit artifact.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::models::config::Config;
use crate::domain::models::governance::Governance;
use crate::domain::models::patch::{AuditArtifact, MutableState, PatchPlan};
use crate::domain::models::recommendation::Recommendation;
use crate::domain::ports::{load_or_default, names, DocumentStore};
use crate::services::patch_applier::PatchApplier;
use crate::services::patch_plan::PatchPlanBuilder;

/// The result of one governance pass.
#[derive(Debug)]
pub struct GovernanceOutcome {
    /// The deterministic plan built from the recommendation list.
    pub plan: PatchPlan,

    /// The persisted audit artifact; absent on dry runs.
    pub artifact: Option<AuditArtifact>,
}

/// One batch recommendation-to-patch pass.
pub struct GovernancePass {
    store: Arc<dyn DocumentStore>,
    config: Config,
}

impl GovernancePass {
    /// Create a pass over a document store with explicit configuration.
    pub fn new(store: Arc<dyn DocumentStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the pass. With `dry_run` the plan is built but nothing is written.
    pub async fn run(&self, dry_run: bool) -> Result<GovernanceOutcome> {
        let store = self.store.as_ref();

        let governance: Governance = load_or_default(store, names::GOVERNANCE)
            .await
            .context("reading governance document")?;
        governance.validate()?;

        let recommendations: Vec<Recommendation> =
            load_or_default(store, names::RECOMMENDATIONS).await?;
        let initial = MutableState {
            queue: load_or_default(store, names::PROMOTION_QUEUE).await?,
            roster: load_or_default(store, names::EXPERIMENT_ROSTER).await?,
        };

        info!(
            recommendations = recommendations.len(),
            cap = self.config.patches.max_data_patches_per_run,
            "starting governance pass"
        );

        let builder = PatchPlanBuilder::new(self.config.patches.max_data_patches_per_run);
        let (plan, _evolved) = builder.build(&recommendations, &governance, initial);

        let artifact = if dry_run {
            info!("dry run, patches not applied");
            None
        } else {
            let applier = PatchApplier::new(Arc::clone(&self.store));
            Some(
                applier
                    .apply(&plan)
                    .await
                    .context("applying patch plan")?,
            )
        };

        Ok(GovernanceOutcome { plan, artifact })
    }
}
