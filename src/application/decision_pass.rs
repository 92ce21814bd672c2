//! The decision pass: signals → scores → budget → ranked decisions.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::domain::models::config::Config;
use crate::domain::models::decision::DecisionsDocument;
use crate::domain::models::documents::{
    CostProjection, EngagementSummary, PromotionEvent, PromotionQueue, SlugOverride,
    WorthinessEntry,
};
use crate::domain::models::experiment::ExperimentRoster;
use crate::domain::models::governance::Governance;
use crate::domain::ports::{load_or_default, names, DocumentStore};
use crate::services::budget_allocator::allocate_budget;
use crate::services::ranker::rank_candidates;
use crate::services::scoring::ScoringEngine;

/// One batch scoring pass over the promotion queue.
pub struct DecisionPass {
    store: Arc<dyn DocumentStore>,
    config: Config,
}

impl DecisionPass {
    /// Create a pass over a document store with explicit configuration.
    pub fn new(store: Arc<dyn DocumentStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the pass. `today` is explicit so two runs over the same documents
    /// are byte-identical. With `dry_run` the decisions document is computed
    /// but not written.
    pub async fn run(&self, today: NaiveDate, dry_run: bool) -> Result<DecisionsDocument> {
        let store = self.store.as_ref();

        let governance: Governance = load_or_default(store, names::GOVERNANCE)
            .await
            .context("reading governance document")?;
        governance.validate()?;

        let queue: PromotionQueue = load_or_default(store, names::PROMOTION_QUEUE).await?;
        let overrides: BTreeMap<String, SlugOverride> =
            load_or_default(store, names::OVERRIDES).await?;
        let worthiness: BTreeMap<String, WorthinessEntry> =
            load_or_default(store, names::WORTHINESS).await?;
        let engagement: EngagementSummary = load_or_default(store, names::ENGAGEMENT).await?;
        let history: Vec<PromotionEvent> =
            load_or_default(store, names::PROMOTION_HISTORY).await?;
        let projection: CostProjection = load_or_default(store, names::COST_PROJECTION).await?;
        let roster: ExperimentRoster = load_or_default(store, names::EXPERIMENT_ROSTER).await?;

        info!(
            week = %queue.week,
            candidates = queue.len(),
            "starting decision pass"
        );

        let engine = ScoringEngine::new(
            &governance,
            &overrides,
            &worthiness,
            &engagement,
            &history,
            &roster,
            today,
        );
        let scored = engine.score_queue(&queue);

        let outcome = allocate_budget(&projection, &governance, self.config.budget.tier);
        let decisions = rank_candidates(scored, outcome.budget.items_allowed);

        let document = DecisionsDocument {
            decisions,
            budget: outcome.budget,
            warnings: outcome.warnings,
        };

        if dry_run {
            info!("dry run, decisions not written");
        } else {
            let value = serde_json::to_value(&document).context("serializing decisions")?;
            self.store
                .write(names::DECISIONS, &value)
                .await
                .context("writing decisions document")?;
        }

        Ok(document)
    }
}
