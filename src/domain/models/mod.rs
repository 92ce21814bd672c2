pub mod config;
pub mod decision;
pub mod documents;
pub mod experiment;
pub mod governance;
pub mod patch;
pub mod recommendation;

pub use config::{BudgetConfig, Config, DocumentPathsConfig, LoggingConfig, PatchConfig};
pub use decision::{Budget, Decision, DecisionAction, DecisionsDocument, SignalScore};
pub use documents::{
    CostProjection, EngagementCounts, EngagementSummary, PromotionEvent, PromotionQueue,
    QueueEntry, SlugOverride, TierBudget, WorthinessEntry,
};
pub use experiment::{Experiment, ExperimentArm, ExperimentRoster, ExperimentStatus};
pub use governance::Governance;
pub use patch::{AuditArtifact, MutableState, Note, Patch, PatchPlan, TranslationOutcome};
pub use recommendation::{Recommendation, RecommendationCategory};
