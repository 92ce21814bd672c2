pub mod budget_allocator;
pub mod experiment_evaluator;
pub mod patch_applier;
pub mod patch_plan;
pub mod ranker;
pub mod scoring;
pub mod signals;
pub mod translator;

pub use budget_allocator::{allocate_budget, BudgetOutcome};
pub use patch_applier::{validate_patches, ApplyError, PatchApplier};
pub use patch_plan::PatchPlanBuilder;
pub use ranker::rank_candidates;
pub use scoring::{ScoredCandidate, ScoringEngine};
pub use translator::translate;
