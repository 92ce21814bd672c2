//! Herald - Promotion-Governance Engine
//!
//! Herald turns raw signals about software-tool candidates (proof artifacts,
//! audience engagement, promotion freshness, an external worthiness rubric,
//! and A/B experiment results) into ranked promote/skip/defer decisions under
//! a weekly budget, and separately translates advisory recommendations into a
//! capped, freeze-aware set of state-file patches with a full audit trail.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure business models and storage ports
//! - **Service Layer** (`services`): Scoring, ranking, and patch governance
//! - **Application Layer** (`application`): Batch pass orchestration
//! - **Infrastructure Layer** (`infrastructure`): Config loading and JSON
//!   document storage
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use herald::application::DecisionPass;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load documents, score the queue, write decisions
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{DecisionPass, GovernanceOutcome, GovernancePass};
pub use domain::models::{
    Budget, Config, Decision, DecisionAction, DecisionsDocument, Experiment, ExperimentRoster,
    ExperimentStatus, Governance, MutableState, Note, Patch, PatchPlan, PromotionQueue,
    Recommendation, RecommendationCategory, SignalScore,
};
pub use domain::ports::{DocumentStore, StoreError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{PatchApplier, PatchPlanBuilder, ScoringEngine};
