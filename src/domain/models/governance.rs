//! The governance document: human-owned configuration gating every
//! automated decision and mutation.

use serde::{Deserialize, Serialize};

/// Schema version this engine understands.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// The shared governance document.
///
/// Human-edited; the engine only ever reads it. The patch mechanism may
/// target other documents but never this one: governance fields are
/// protected from automated mutation, enforced before any write in
/// [`validate_patches`](crate::services::patch_applier::validate_patches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Governance {
    /// Versioned schema tag.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// When set, no recommendation may mutate the promotion queue.
    #[serde(default)]
    pub decisions_frozen: bool,

    /// When set, no recommendation may mutate the experiment roster.
    #[serde(default)]
    pub experiments_frozen: bool,

    /// Weekly promotion cap.
    #[serde(default = "default_max_promos_per_week")]
    pub max_promos_per_week: u32,

    /// Days a slug must rest between promotions.
    #[serde(default = "default_cooldown_days")]
    pub cooldown_days_per_slug: i64,

    /// Minimum entries per experiment arm before a comparison is attempted.
    #[serde(default = "default_min_experiment_data")]
    pub min_experiment_data_threshold: u64,

    /// Free-form hard rules, surfaced verbatim to operators.
    #[serde(default)]
    pub hard_rules: Vec<String>,
}

const fn default_schema_version() -> u32 {
    SUPPORTED_SCHEMA_VERSION
}

const fn default_max_promos_per_week() -> u32 {
    3
}

const fn default_cooldown_days() -> i64 {
    14
}

const fn default_min_experiment_data() -> u64 {
    10
}

impl Default for Governance {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            decisions_frozen: false,
            experiments_frozen: false,
            max_promos_per_week: default_max_promos_per_week(),
            cooldown_days_per_slug: default_cooldown_days(),
            min_experiment_data_threshold: default_min_experiment_data(),
            hard_rules: Vec::new(),
        }
    }
}

impl Governance {
    /// Check every field and return all violations found, not just the first.
    pub fn validate(&self) -> Result<(), crate::domain::GovernanceError> {
        let mut violations = Vec::new();

        if self.schema_version != SUPPORTED_SCHEMA_VERSION {
            violations.push(format!(
                "unsupported schemaVersion {} (engine supports {})",
                self.schema_version, SUPPORTED_SCHEMA_VERSION
            ));
        }
        if self.max_promos_per_week == 0 {
            violations.push("maxPromosPerWeek must be at least 1".to_string());
        }
        if self.cooldown_days_per_slug < 0 {
            violations.push(format!(
                "cooldownDaysPerSlug must not be negative (got {})",
                self.cooldown_days_per_slug
            ));
        }
        if self.min_experiment_data_threshold == 0 {
            violations.push("minExperimentDataThreshold must be at least 1".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(crate::domain::GovernanceError::InvalidGovernance { violations })
        }
    }
}
