//! Experiment evaluator: annotates the explanation trace with A/B arm
//! comparisons.
//!
//! Experiments never change the four-dimension total score. For each active
//! experiment attached to a candidate the evaluator emits exactly one note:
//! missing feedback, insufficient data, an informational-only single variant,
//! a clear winner, or no clear winner.

use std::collections::BTreeMap;

use crate::domain::models::documents::{EngagementCounts, EngagementSummary};
use crate::domain::models::experiment::{Experiment, ExperimentArm, ExperimentRoster, CONTROL_ARM};

/// A variant must beat the runner-up by more than this rate ratio to be
/// declared a winner.
const WINNER_RATIO: f64 = 2.0;

/// Evaluate every active experiment attached to `slug`, returning notes in
/// roster order.
pub fn evaluate_for_slug(
    slug: &str,
    roster: &ExperimentRoster,
    engagement: &EngagementSummary,
    min_entries: u64,
) -> Vec<String> {
    roster
        .active_for_slug(slug)
        .into_iter()
        .map(|experiment| evaluate_experiment(experiment, engagement, min_entries))
        .collect()
}

/// Evaluate one experiment against the feedback data.
pub fn evaluate_experiment(
    experiment: &Experiment,
    engagement: &EngagementSummary,
    min_entries: u64,
) -> String {
    let id = &experiment.id;

    let Some(arm_counts) = engagement.experiments.get(id).filter(|arms| !arms.is_empty())
    else {
        return format!("experiment {id}: no feedback data");
    };

    let arms = build_arms(arm_counts);
    let control_entries = arms
        .iter()
        .find(|arm| arm.key == CONTROL_ARM)
        .map_or(0, |arm| arm.entries);

    // A zero-entry control leaves nothing to compare against; a single
    // populated variant is reported as informational only.
    if control_entries == 0 {
        let populated: Vec<&ExperimentArm> = arms
            .iter()
            .filter(|arm| arm.key != CONTROL_ARM && arm.entries > 0)
            .collect();
        if let [only] = populated.as_slice() {
            return format!(
                "experiment {id}: control arm empty; variant {} informational only ({:.1}% reply rate over {} entries)",
                only.key,
                only.rate * 100.0,
                only.entries
            );
        }
    }

    if arms.iter().any(|arm| arm.entries < min_entries) {
        return format!(
            "experiment {id}: insufficient data (every arm needs at least {min_entries} entries)"
        );
    }

    compare_arms(id, arms)
}

/// Build arms from the per-arm counters, reply rates included.
fn build_arms(arm_counts: &BTreeMap<String, EngagementCounts>) -> Vec<ExperimentArm> {
    arm_counts
        .iter()
        .map(|(key, counts)| ExperimentArm {
            key: key.clone(),
            entries: counts.total(),
            replied: counts.replied,
            rate: counts.reply_rate(),
        })
        .collect()
}

/// Rank arms descending by reply rate and compare best against second-best.
fn compare_arms(id: &str, mut arms: Vec<ExperimentArm>) -> String {
    // Stable sort: equal rates keep the BTreeMap's key order.
    arms.sort_by(|a, b| b.rate.partial_cmp(&a.rate).unwrap_or(std::cmp::Ordering::Equal));

    let [best, second, ..] = arms.as_slice() else {
        return format!("experiment {id}: no clear winner, needs >2x");
    };

    if second.rate <= f64::EPSILON {
        if best.rate > f64::EPSILON {
            return format!(
                "experiment {id}: variant {} outperforms (runner-up arm has no replies)",
                best.key
            );
        }
        return format!("experiment {id}: no clear winner, needs >2x");
    }

    let ratio = best.rate / second.rate;
    if ratio > WINNER_RATIO {
        format!(
            "experiment {id}: variant {} outperforms at {ratio:.1}x",
            best.key
        )
    } else {
        format!("experiment {id}: no clear winner, needs >2x")
    }
}
