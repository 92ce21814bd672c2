//! Decision outputs of one scoring pass.

use serde::{Deserialize, Serialize};

/// One dimension's contribution for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalScore {
    /// Points contributed by this dimension.
    pub score: u32,

    /// One-line human-readable account of the contribution. First-class
    /// output for the audit trace, not a debug artifact.
    pub explanation: String,

    /// Set only by the freshness dimension when the slug is inside its
    /// cooldown window.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub defer: bool,
}

impl SignalScore {
    /// A plain contribution with no defer flag.
    pub fn new(score: u32, explanation: impl Into<String>) -> Self {
        Self {
            score,
            explanation: explanation.into(),
            defer: false,
        }
    }

    /// A zero contribution that forces the candidate to defer.
    pub fn deferred(explanation: impl Into<String>) -> Self {
        Self {
            score: 0,
            explanation: explanation.into(),
            defer: true,
        }
    }
}

/// The action assigned to one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    /// Promote this cycle.
    Promote,
    /// Eligible but over budget.
    Skip,
    /// Inside the cooldown window; never consumes budget.
    Defer,
}

impl DecisionAction {
    /// Stable lowercase name used on the wire and in tables.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Promote => "promote",
            Self::Skip => "skip",
            Self::Defer => "defer",
        }
    }
}

/// One candidate's final decision. Immutable once created; a new pass fully
/// replaces the previous decision set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// The candidate slug.
    pub slug: String,

    /// Assigned action.
    pub action: DecisionAction,

    /// Total score across all four dimensions (0–100).
    pub score: u32,

    /// Explanation trace: one line per dimension in fixed order, followed by
    /// experiment-evaluator notes in experiment-list order.
    pub explanation: Vec<String>,
}

/// The budget derived for one pass. Never stored independently; recomputed
/// every pass from the cost projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Operating tier the projection was read at.
    pub tier: u32,

    /// Minutes remaining in that tier.
    pub headroom: f64,

    /// Promotions allowed this cycle.
    pub items_allowed: u32,
}

/// The decisions output document for one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionsDocument {
    /// One decision per queued candidate, in ranked order.
    pub decisions: Vec<Decision>,

    /// The budget the ranker operated under.
    pub budget: Budget,

    /// Non-fatal warnings raised during the pass.
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        assert_eq!(
            serde_json::to_string(&DecisionAction::Promote).unwrap(),
            "\"promote\""
        );
        assert_eq!(DecisionAction::Defer.as_str(), "defer");
    }

    #[test]
    fn test_signal_score_defer_constructor() {
        let score = SignalScore::deferred("freshness: 0/20 (cooldown)");
        assert_eq!(score.score, 0);
        assert!(score.defer);

        let plain = SignalScore::new(20, "worthiness: 20/20");
        assert!(!plain.defer);
    }

    #[test]
    fn test_decision_round_trip() {
        let decision = Decision {
            slug: "tool-x".to_string(),
            action: DecisionAction::Promote,
            score: 72,
            explanation: vec!["proof: 30/30".to_string()],
        };
        let json = serde_json::to_string(&decision).unwrap();
        let back: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, decision);
    }
}
