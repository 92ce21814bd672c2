//! Advisory recommendations produced by the external insight generator.

use serde::{Deserialize, Serialize};

/// Closed set of recommendation categories, plus an explicit fallback for
/// anything unrecognized. Unknown categories are never silently dropped;
/// the translator turns them into advisories naming the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecommendationCategory {
    /// Put a slug back into the promotion queue.
    ReFeature,
    /// Conclude a finished experiment.
    ExperimentGraduation,
    /// The slug needs better public proof.
    ImproveProof,
    /// A submission has stalled somewhere external.
    StuckSubmission,
    /// Promotion copy needs a lint pass.
    LintPromotion,
    /// Anything the engine does not recognize.
    Unknown(String),
}

impl RecommendationCategory {
    /// Stable wire name for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::ReFeature => "re-feature",
            Self::ExperimentGraduation => "experiment-graduation",
            Self::ImproveProof => "improve-proof",
            Self::StuckSubmission => "stuck-submission",
            Self::LintPromotion => "lint-promotion",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for RecommendationCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "re-feature" => Self::ReFeature,
            "experiment-graduation" => Self::ExperimentGraduation,
            "improve-proof" => Self::ImproveProof,
            "stuck-submission" => Self::StuckSubmission,
            "lint-promotion" => Self::LintPromotion,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<RecommendationCategory> for String {
    fn from(category: RecommendationCategory) -> Self {
        category.as_str().to_string()
    }
}

/// One advisory recommendation. Produced externally; the translator is a
/// pure function of `(Recommendation, Governance, MutableState)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// What kind of action is being recommended.
    pub category: RecommendationCategory,

    /// The slug (or experiment id for graduations) the recommendation targets.
    pub slug: String,

    /// Supporting insight text, carried through to advisories verbatim.
    #[serde(default)]
    pub evidence: String,

    /// Relative priority assigned by the generator; informational here.
    #[serde(default)]
    pub priority: u32,
}
