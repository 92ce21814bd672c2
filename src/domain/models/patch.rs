//! Patches, patch plans, and the audit artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::documents::PromotionQueue;
use super::experiment::ExperimentRoster;
use super::recommendation::RecommendationCategory;

/// Well-known target document keys.
pub mod targets {
    /// The promotion queue document.
    pub const PROMOTION_QUEUE: &str = "promotion-queue";
    /// The experiment roster document.
    pub const EXPERIMENT_ROSTER: &str = "experiment-roster";
    /// The governance document. Protected: never a valid patch target.
    pub const GOVERNANCE: &str = "governance";
}

/// One proposed mutation: a shallow merge against exactly one target document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    /// Category of the recommendation that produced this patch.
    pub category: RecommendationCategory,

    /// Slug (or experiment id) the patch concerns.
    pub slug: String,

    /// Target document key, one of [`targets`].
    pub target: String,

    /// Human-readable description of the mutation.
    pub description: String,

    /// Shallow-merge object applied to the target document. Top-level keys
    /// replace the document's keys wholesale.
    pub apply: serde_json::Value,

    /// Risk note accumulated into the plan when the patch is accepted.
    pub risk_note: String,
}

/// An advisory or frozen-action note in a patch plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Category of the originating recommendation.
    pub category: RecommendationCategory,

    /// Slug (or experiment id) the note concerns.
    pub slug: String,

    /// The note text.
    pub note: String,
}

impl Note {
    /// Build a note for a recommendation outcome.
    pub fn new(
        category: RecommendationCategory,
        slug: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            category,
            slug: slug.into(),
            note: note.into(),
        }
    }
}

/// The translator's verdict on one recommendation.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    /// The recommendation becomes a data-mutating patch.
    Patch(Patch),
    /// The recommendation stays advisory.
    Advisory(Note),
    /// The recommendation was blocked solely by a governance freeze flag.
    Frozen(Note),
}

/// The complete, deterministic output of one plan-building pass.
///
/// Two calls with identical ordered recommendations, governance, and initial
/// state produce byte-identical plans. The only timestamp lives in the
/// persisted [`AuditArtifact`], never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchPlan {
    /// Accepted patches, in recommendation order, post-cap.
    pub patches: Vec<Patch>,

    /// Advisory notes, including cap-overflow downgrades.
    pub advisory_notes: Vec<Note>,

    /// Risk notes from accepted patches, in acceptance order.
    pub risk_notes: Vec<String>,

    /// Actions blocked solely by a governance freeze flag.
    pub frozen_actions: Vec<Note>,
}

/// In-memory working copy of the patchable documents.
///
/// Evolves within one plan-building pass as patches are tentatively accepted,
/// so a later recommendation sees an earlier one's effect. A patch rejected
/// for exceeding the cap never touches this state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutableState {
    /// Working copy of the promotion queue.
    pub queue: PromotionQueue,

    /// Working copy of the experiment roster.
    pub roster: ExperimentRoster,
}

/// The single persisted record of one patch-plan run.
///
/// The only place a timestamp is permitted to appear; the plan itself stays
/// timestamp-free to preserve determinism.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditArtifact {
    /// When the run happened.
    pub generated_at: DateTime<Utc>,

    /// Unique run identifier.
    pub run_id: Uuid,

    /// Accepted patches.
    pub patches: Vec<Patch>,

    /// Advisory notes.
    pub advisory_notes: Vec<Note>,

    /// Risk notes.
    pub risk_notes: Vec<String>,

    /// Frozen actions.
    pub frozen_actions: Vec<Note>,
}

impl AuditArtifact {
    /// Stamp a plan into an audit artifact.
    pub fn from_plan(plan: &PatchPlan, generated_at: DateTime<Utc>, run_id: Uuid) -> Self {
        Self {
            generated_at,
            run_id,
            patches: plan.patches.clone(),
            advisory_notes: plan.advisory_notes.clone(),
            risk_notes: plan.risk_notes.clone(),
            frozen_actions: plan.frozen_actions.clone(),
        }
    }
}

/// Apply one shallow merge: every top-level key in `apply` replaces the
/// corresponding key in `target` wholesale. Non-object targets are replaced
/// entirely.
pub fn shallow_merge(target: &mut serde_json::Value, apply: &serde_json::Value) {
    match (target.as_object_mut(), apply.as_object()) {
        (Some(target_map), Some(apply_map)) => {
            for (key, value) in apply_map {
                target_map.insert(key.clone(), value.clone());
            }
        }
        _ => *target = apply.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shallow_merge_replaces_top_level_keys() {
        let mut target = json!({"week": "2026-W31", "slugs": ["a"], "promotionType": "weekly"});
        shallow_merge(&mut target, &json!({"slugs": ["a", "b"]}));
        assert_eq!(
            target,
            json!({"week": "2026-W31", "slugs": ["a", "b"], "promotionType": "weekly"})
        );
    }

    #[test]
    fn test_shallow_merge_non_object_target() {
        let mut target = json!(null);
        shallow_merge(&mut target, &json!({"experiments": []}));
        assert_eq!(target, json!({"experiments": []}));
    }

    #[test]
    fn test_plan_serialization_has_no_timestamp() {
        let plan = PatchPlan::default();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(!json.contains("generatedAt"));
    }

    #[test]
    fn test_audit_artifact_carries_full_plan() {
        let plan = PatchPlan {
            patches: vec![],
            advisory_notes: vec![Note::new(
                RecommendationCategory::ImproveProof,
                "tool-x",
                "needs a public benchmark",
            )],
            risk_notes: vec!["queue now 3/5".to_string()],
            frozen_actions: vec![],
        };
        let artifact = AuditArtifact::from_plan(&plan, Utc::now(), Uuid::new_v4());
        assert_eq!(artifact.advisory_notes, plan.advisory_notes);
        assert_eq!(artifact.risk_notes, plan.risk_notes);
    }
}
