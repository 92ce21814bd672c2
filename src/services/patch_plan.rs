//! Patch-plan builder: an ordered fold of recommendations into a plan.
//!
//! Recommendations are processed strictly in order against an evolving copy
//! of the patchable documents, so a later recommendation observes an earlier
//! one's tentative effect. The fold carries `(plan, state)` explicitly, with
//! no in-place document mutation, so it is replayable and testable in
//! isolation.

use tracing::{debug, info};

use crate::domain::models::governance::Governance;
use crate::domain::models::patch::{
    shallow_merge, targets, MutableState, Note, Patch, PatchPlan, TranslationOutcome,
};
use crate::domain::models::recommendation::Recommendation;

use super::translator;

/// Builds deterministic patch plans under a global patch-count cap.
#[derive(Debug, Clone)]
pub struct PatchPlanBuilder {
    max_patches: usize,
}

impl PatchPlanBuilder {
    /// Create a builder with the given per-run patch cap.
    pub const fn new(max_patches: usize) -> Self {
        Self { max_patches }
    }

    /// Fold an ordered recommendation list into a plan.
    ///
    /// Identical ordered recommendations, governance, and initial state
    /// produce byte-identical plans. Returns the plan together with the final
    /// evolved state (useful for dry-run display).
    pub fn build(
        &self,
        recommendations: &[Recommendation],
        governance: &Governance,
        initial: MutableState,
    ) -> (PatchPlan, MutableState) {
        let mut plan = PatchPlan::default();
        let mut state = initial;

        for rec in recommendations {
            match translator::translate(rec, governance, &state) {
                TranslationOutcome::Patch(patch) => {
                    if plan.patches.len() >= self.max_patches {
                        // Over the cap: downgrade to advisory, leave the
                        // evolving state untouched.
                        debug!(slug = %patch.slug, "patch cap reached, downgrading");
                        plan.advisory_notes.push(Note::new(
                            patch.category.clone(),
                            &patch.slug,
                            format!(
                                "patch cap exceeded ({} per run); '{}' downgraded to advisory",
                                self.max_patches, patch.slug
                            ),
                        ));
                        continue;
                    }

                    state = fold_patch(state, &patch);
                    plan.risk_notes.push(patch.risk_note.clone());
                    plan.patches.push(patch);
                }
                TranslationOutcome::Advisory(note) => plan.advisory_notes.push(note),
                TranslationOutcome::Frozen(note) => plan.frozen_actions.push(note),
            }
        }

        info!(
            patches = plan.patches.len(),
            advisories = plan.advisory_notes.len(),
            frozen = plan.frozen_actions.len(),
            "patch plan built"
        );
        (plan, state)
    }
}

/// Fold one accepted patch into the evolving state, using the same shallow
/// merge the applier will perform on disk.
fn fold_patch(state: MutableState, patch: &Patch) -> MutableState {
    let MutableState { queue, roster } = state;

    match patch.target.as_str() {
        targets::PROMOTION_QUEUE => {
            let mut value = serde_json::to_value(&queue).unwrap_or_default();
            shallow_merge(&mut value, &patch.apply);
            let queue = serde_json::from_value(value).unwrap_or(queue);
            MutableState { queue, roster }
        }
        targets::EXPERIMENT_ROSTER => {
            let mut value = serde_json::to_value(&roster).unwrap_or_default();
            shallow_merge(&mut value, &patch.apply);
            let roster = serde_json::from_value(value).unwrap_or(roster);
            MutableState { queue, roster }
        }
        _ => MutableState { queue, roster },
    }
}
