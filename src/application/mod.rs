//! Application layer: batch pass orchestration.
//!
//! Each pass is one invocation: read a fixed set of documents, compute,
//! write a fixed set of outputs, terminate. The core services stay pure;
//! this layer owns document loading and persistence.

pub mod decision_pass;
pub mod governance_pass;

pub use decision_pass::DecisionPass;
pub use governance_pass::{GovernanceOutcome, GovernancePass};
