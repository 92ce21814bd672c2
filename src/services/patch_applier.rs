//! Patch applier: materializes an approved plan into target documents plus
//! one audit artifact.
//!
//! Writes are coalesced: patches are grouped by target document, and each
//! target gets exactly one read, the shallow merges in list order, and one
//! write. Two patches against the same document in one run can therefore
//! never overwrite each other's effect.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::error::GovernanceError;
use crate::domain::models::patch::{shallow_merge, targets, AuditArtifact, Patch, PatchPlan};
use crate::domain::ports::{DocumentStore, StoreError};

/// Targets a patch may legally name.
const PATCHABLE_TARGETS: [&str; 2] = [targets::PROMOTION_QUEUE, targets::EXPERIMENT_ROSTER];

/// Applier errors: either the plan is invalid or a write genuinely failed.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error(transparent)]
    Invalid(#[from] GovernanceError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Check every patch in the plan and report all violations found, not just
/// the first. Rejects protected targets (governance), unknown targets, and
/// non-object merge payloads, all before any write happens.
pub fn validate_patches(patches: &[Patch]) -> Result<(), GovernanceError> {
    let mut violations = Vec::new();

    for (index, patch) in patches.iter().enumerate() {
        if patch.target == targets::GOVERNANCE {
            violations.push(format!(
                "patch {index} ('{}') targets protected document '{}'",
                patch.slug,
                targets::GOVERNANCE
            ));
        } else if !PATCHABLE_TARGETS.contains(&patch.target.as_str()) {
            violations.push(format!(
                "patch {index} ('{}') targets unknown document '{}'",
                patch.slug, patch.target
            ));
        }
        if !patch.apply.is_object() {
            violations.push(format!(
                "patch {index} ('{}') apply payload must be a JSON object",
                patch.slug
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(GovernanceError::InvalidPatches { violations })
    }
}

/// Applies approved plans through a [`DocumentStore`].
pub struct PatchApplier {
    store: Arc<dyn DocumentStore>,
}

impl PatchApplier {
    /// Create an applier over a document store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Apply a plan's patches and persist the audit artifact.
    ///
    /// The audit artifact is the only timestamped output of a run; the plan
    /// itself stays timestamp-free.
    pub async fn apply(&self, plan: &PatchPlan) -> Result<AuditArtifact, ApplyError> {
        validate_patches(&plan.patches)?;

        for (target, group) in group_by_target(&plan.patches) {
            // One read, the merges in order, one write.
            let mut document = self
                .store
                .read(target)
                .await?
                .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

            for patch in &group {
                shallow_merge(&mut document, &patch.apply);
            }

            self.store.write(target, &document).await?;
            info!(target, patches = group.len(), "document updated");
        }

        let artifact = AuditArtifact::from_plan(plan, Utc::now(), Uuid::new_v4());
        let audit_name = format!(
            "audit/{}-{}.json",
            artifact.generated_at.format("%Y%m%dT%H%M%SZ"),
            artifact.run_id
        );
        let audit_value =
            serde_json::to_value(&artifact).map_err(|source| StoreError::Serialization {
                name: audit_name.clone(),
                source,
            })?;
        self.store.write(&audit_name, &audit_value).await?;
        info!(audit = %audit_name, "audit artifact persisted");

        Ok(artifact)
    }
}

/// Group patches by target, preserving first-seen target order and in-group
/// list order.
fn group_by_target(patches: &[Patch]) -> Vec<(&str, Vec<&Patch>)> {
    let mut groups: Vec<(&str, Vec<&Patch>)> = Vec::new();
    for patch in patches {
        match groups.iter_mut().find(|(target, _)| *target == patch.target) {
            Some((_, group)) => group.push(patch),
            None => groups.push((patch.target.as_str(), vec![patch])),
        }
    }
    groups
}
