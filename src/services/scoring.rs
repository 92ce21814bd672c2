//! Scoring engine: combines the four dimension signals and experiment notes
//! into one scored candidate with a full explanation trace.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::models::documents::{
    EngagementSummary, PromotionEvent, PromotionQueue, SlugOverride, WorthinessEntry,
};
use crate::domain::models::experiment::ExperimentRoster;
use crate::domain::models::governance::Governance;

use super::experiment_evaluator;
use super::signals;

/// One candidate after scoring, before ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    /// The candidate slug.
    pub slug: String,

    /// Total score across all four dimensions (0–100).
    pub score: u32,

    /// Dimension explanations in fixed order, then experiment notes in
    /// experiment-list order.
    pub explanation: Vec<String>,

    /// Set when freshness places the slug inside its cooldown window.
    /// Freshness is the only dimension that can force a defer.
    pub defer: bool,
}

/// Scores candidates against one snapshot of the input documents.
///
/// Pure: all inputs are explicit, including the reference date, which is what
/// makes two runs over the same documents byte-identical.
#[derive(Debug)]
pub struct ScoringEngine<'a> {
    governance: &'a Governance,
    overrides: &'a BTreeMap<String, SlugOverride>,
    worthiness: &'a BTreeMap<String, WorthinessEntry>,
    engagement: &'a EngagementSummary,
    history: &'a [PromotionEvent],
    roster: &'a ExperimentRoster,
    today: NaiveDate,
}

impl<'a> ScoringEngine<'a> {
    /// Build an engine over one snapshot of the input documents.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        governance: &'a Governance,
        overrides: &'a BTreeMap<String, SlugOverride>,
        worthiness: &'a BTreeMap<String, WorthinessEntry>,
        engagement: &'a EngagementSummary,
        history: &'a [PromotionEvent],
        roster: &'a ExperimentRoster,
        today: NaiveDate,
    ) -> Self {
        Self {
            governance,
            overrides,
            worthiness,
            engagement,
            history,
            roster,
            today,
        }
    }

    /// Score a single candidate.
    pub fn score(&self, slug: &str) -> ScoredCandidate {
        let proof = signals::proof_signal(slug, self.overrides);
        let engagement = signals::engagement_signal(slug, self.engagement);
        let freshness = signals::freshness_signal(
            slug,
            self.history,
            self.today,
            self.governance.cooldown_days_per_slug,
        );
        let worthiness = signals::worthiness_signal(slug, self.worthiness);

        let score = proof.score + engagement.score + freshness.score + worthiness.score;
        let defer = freshness.defer;

        let mut explanation = vec![
            proof.explanation,
            engagement.explanation,
            freshness.explanation,
            worthiness.explanation,
        ];
        explanation.extend(experiment_evaluator::evaluate_for_slug(
            slug,
            self.roster,
            self.engagement,
            self.governance.min_experiment_data_threshold,
        ));

        debug!(slug, score, defer, "scored candidate");

        ScoredCandidate {
            slug: slug.to_string(),
            score,
            explanation,
            defer,
        }
    }

    /// Score every queued candidate, preserving queue order.
    pub fn score_queue(&self, queue: &PromotionQueue) -> Vec<ScoredCandidate> {
        queue
            .slugs
            .iter()
            .map(|entry| self.score(entry.slug()))
            .collect()
    }
}
