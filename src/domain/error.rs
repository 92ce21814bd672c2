use thiserror::Error;

use super::models::experiment::ExperimentStatus;

/// Domain-level errors for governance operations
#[derive(Error, Debug)]
pub enum GovernanceError {
    #[error("Governance validation failed: {}", violations.join("; "))]
    InvalidGovernance { violations: Vec<String> },

    #[error("Patch validation failed: {}", violations.join("; "))]
    InvalidPatches { violations: Vec<String> },

    #[error("Invalid experiment transition from {from:?} to {to:?}")]
    InvalidExperimentTransition {
        from: ExperimentStatus,
        to: ExperimentStatus,
    },

    #[error("Experiment not found: {0}")]
    ExperimentNotFound(String),
}
