use serde::{Deserialize, Serialize};

/// Main configuration structure for Herald
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Paths of the governed documents
    #[serde(default)]
    pub documents: DocumentPathsConfig,

    /// Budget allocation configuration
    #[serde(default)]
    pub budget: BudgetConfig,

    /// Patch governor configuration
    #[serde(default)]
    pub patches: PatchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Paths of the input and output documents, all project-local by default
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DocumentPathsConfig {
    /// Governance document (read-only, never patchable)
    #[serde(default = "default_governance_path")]
    pub governance: String,

    /// Promotion queue document
    #[serde(default = "default_queue_path")]
    pub promotion_queue: String,

    /// Per-slug proof overrides
    #[serde(default = "default_overrides_path")]
    pub overrides: String,

    /// Worthiness rubric results
    #[serde(default = "default_worthiness_path")]
    pub worthiness: String,

    /// Engagement summary (per-slug and per-experiment counters)
    #[serde(default = "default_engagement_path")]
    pub engagement: String,

    /// Promotion history, newest first
    #[serde(default = "default_history_path")]
    pub history: String,

    /// Cost projection (minute budgets by tier)
    #[serde(default = "default_cost_path")]
    pub cost_projection: String,

    /// Experiment roster
    #[serde(default = "default_roster_path")]
    pub experiment_roster: String,

    /// Recommendations list produced by the external insight generator
    #[serde(default = "default_recommendations_path")]
    pub recommendations: String,

    /// Decisions output document
    #[serde(default = "default_decisions_path")]
    pub decisions: String,

    /// Directory audit artifacts are written into
    #[serde(default = "default_audit_dir")]
    pub audit_dir: String,
}

fn default_governance_path() -> String {
    ".herald/governance.json".to_string()
}

fn default_queue_path() -> String {
    ".herald/promotion-queue.json".to_string()
}

fn default_overrides_path() -> String {
    ".herald/overrides.json".to_string()
}

fn default_worthiness_path() -> String {
    ".herald/worthiness.json".to_string()
}

fn default_engagement_path() -> String {
    ".herald/engagement.json".to_string()
}

fn default_history_path() -> String {
    ".herald/promotion-history.json".to_string()
}

fn default_cost_path() -> String {
    ".herald/cost-projection.json".to_string()
}

fn default_roster_path() -> String {
    ".herald/experiment-roster.json".to_string()
}

fn default_recommendations_path() -> String {
    ".herald/recommendations.json".to_string()
}

fn default_decisions_path() -> String {
    ".herald/decisions.json".to_string()
}

fn default_audit_dir() -> String {
    ".herald/audit".to_string()
}

impl Default for DocumentPathsConfig {
    fn default() -> Self {
        Self {
            governance: default_governance_path(),
            promotion_queue: default_queue_path(),
            overrides: default_overrides_path(),
            worthiness: default_worthiness_path(),
            engagement: default_engagement_path(),
            history: default_history_path(),
            cost_projection: default_cost_path(),
            experiment_roster: default_roster_path(),
            recommendations: default_recommendations_path(),
            decisions: default_decisions_path(),
            audit_dir: default_audit_dir(),
        }
    }
}

/// Budget allocation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BudgetConfig {
    /// Operating tier the cost projection is read at (minutes)
    #[serde(default = "default_tier")]
    pub tier: u32,
}

const fn default_tier() -> u32 {
    200
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            tier: default_tier(),
        }
    }
}

/// Patch governor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PatchConfig {
    /// Global cap on data-mutating patches per run; overflow becomes advisory
    #[serde(default = "default_max_data_patches")]
    pub max_data_patches_per_run: usize,
}

const fn default_max_data_patches() -> usize {
    5
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            max_data_patches_per_run: default_max_data_patches(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
