//! Input documents consumed by a scoring pass.
//!
//! Every document here is read-only from the engine's perspective except the
//! promotion queue, which the patch mechanism may append to. All documents
//! fail soft: a missing or malformed file degrades to the `Default` value.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in the promotion queue: either a bare slug or a slug with an
/// explicit channel list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueueEntry {
    /// Bare slug, promoted on all default channels.
    Slug(String),
    /// Slug with an explicit channel list.
    Channeled {
        /// The candidate slug.
        slug: String,
        /// Channels to promote on.
        channels: Vec<String>,
    },
}

impl QueueEntry {
    /// The slug this entry refers to.
    pub fn slug(&self) -> &str {
        match self {
            Self::Slug(slug) | Self::Channeled { slug, .. } => slug,
        }
    }
}

/// The promotion queue document: the candidates under consideration this week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionQueue {
    /// ISO week label, e.g. `"2026-W31"`.
    #[serde(default)]
    pub week: String,

    /// Queued candidates in declared priority order.
    #[serde(default)]
    pub slugs: Vec<QueueEntry>,

    /// Free-form promotion type label.
    #[serde(default)]
    pub promotion_type: String,
}

impl PromotionQueue {
    /// Whether a slug is already queued.
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.iter().any(|entry| entry.slug() == slug)
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

/// Per-slug proof overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugOverride {
    /// Whether a public proof artifact exists for the slug.
    #[serde(default)]
    pub public_proof: bool,

    /// Claims with published evidence.
    #[serde(default)]
    pub proven_claims: Vec<String>,
}

/// One slug's worthiness rubric result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorthinessEntry {
    /// Whether the external rubric marks this slug worthy.
    #[serde(default)]
    pub worthy: bool,

    /// The rubric's own raw score, informational only.
    #[serde(default)]
    pub score: f64,
}

/// Aggregated outreach outcome counters for one slug or one experiment arm.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementCounts {
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub opened: u64,
    #[serde(default)]
    pub replied: u64,
    #[serde(default)]
    pub ignored: u64,
    #[serde(default)]
    pub bounced: u64,
}

impl EngagementCounts {
    /// Total tracked outcomes.
    pub const fn total(&self) -> u64 {
        self.sent + self.opened + self.replied + self.ignored + self.bounced
    }

    /// Replies as a fraction of all tracked outcomes; zero when no data.
    pub fn reply_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.replied as f64 / total as f64
        }
    }
}

/// The engagement summary document: per-slug counters plus per-experiment,
/// per-arm counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSummary {
    /// Outcome counters keyed by slug.
    #[serde(default)]
    pub slugs: BTreeMap<String, EngagementCounts>,

    /// Outcome counters keyed by experiment id, then arm key.
    #[serde(default)]
    pub experiments: BTreeMap<String, BTreeMap<String, EngagementCounts>>,
}

/// One promotion event in the history document.
///
/// The history document is ordered newest-first; the freshness reader relies
/// on that ordering to find the most recent promotion of a slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionEvent {
    /// Date the promotion ran.
    pub date: NaiveDate,

    /// Slugs promoted that day.
    #[serde(default)]
    pub promoted_slugs: Vec<String>,
}

/// One tier's remaining minute budget.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBudget {
    /// Minutes remaining in the tier after already-committed usage.
    #[serde(default)]
    pub headroom: f64,
}

/// The cost projection document: minute budgets by tier plus the observed
/// average cost of one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProjection {
    /// Minute budgets keyed by tier label (e.g. `"200"`).
    #[serde(default)]
    pub tiers: BTreeMap<String, TierBudget>,

    /// Observed average minutes consumed per promotion run.
    #[serde(default)]
    pub avg_minutes_per_run: f64,
}

impl CostProjection {
    /// Headroom for a tier, zero when the tier is not configured.
    pub fn headroom_for_tier(&self, tier: u32) -> f64 {
        self.tiers
            .get(&tier.to_string())
            .map_or(0.0, |budget| budget.headroom)
    }
}
