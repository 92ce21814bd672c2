//! A/B experiment roster and arm models.

use serde::{Deserialize, Serialize};

use crate::domain::GovernanceError;

/// Lifecycle state of an experiment.
///
/// Only `draft → active → concluded` transitions are permitted; `concluded`
/// is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    /// Defined but not yet collecting data.
    Draft,
    /// Collecting data; the only state the evaluator considers.
    Active,
    /// Finished; terminal.
    Concluded,
}

impl ExperimentStatus {
    /// Stable lowercase name used on the wire and in notes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Concluded => "concluded",
        }
    }

    /// Whether a transition to `next` is permitted.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Active) | (Self::Active, Self::Concluded)
        )
    }

    /// Whether this state admits no further transitions.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Concluded)
    }
}

/// One experiment in the roster document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    /// Stable experiment identifier.
    pub id: String,

    /// Lifecycle state.
    pub status: ExperimentStatus,

    /// Candidate slugs this experiment is attached to.
    #[serde(default)]
    pub slugs: Vec<String>,
}

impl Experiment {
    /// Move the experiment to `next`, rejecting illegal transitions.
    pub fn transition(&mut self, next: ExperimentStatus) -> Result<(), GovernanceError> {
        if !self.status.can_transition_to(next) {
            return Err(GovernanceError::InvalidExperimentTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// The experiment roster document.
///
/// Persisted as an object wrapping the experiment array so a patch can apply
/// one shallow merge against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentRoster {
    /// All known experiments.
    #[serde(default)]
    pub experiments: Vec<Experiment>,
}

impl ExperimentRoster {
    /// Find an experiment by id.
    pub fn find(&self, id: &str) -> Option<&Experiment> {
        self.experiments.iter().find(|e| e.id == id)
    }

    /// Active experiments attached to `slug`, in roster order.
    pub fn active_for_slug(&self, slug: &str) -> Vec<&Experiment> {
        self.experiments
            .iter()
            .filter(|e| e.status == ExperimentStatus::Active && e.slugs.iter().any(|s| s == slug))
            .collect()
    }
}

/// One arm of an experiment, with its computed reply rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentArm {
    /// Arm key; `"control"` is the mandatory baseline arm.
    pub key: String,

    /// Entries observed for this arm.
    pub entries: u64,

    /// Replies observed for this arm.
    pub replied: u64,

    /// Reply rate, `replied / entries` (zero when no entries).
    pub rate: f64,
}

/// Key of the mandatory baseline arm.
pub const CONTROL_ARM: &str = "control";
