//! Signal readers: one pure function per scoring dimension.
//!
//! Each reader takes the candidate slug plus the relevant source document and
//! returns a [`SignalScore`] with a one-line explanation carrying the numeric
//! contribution. Absent data degrades to a zero score, never an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::models::decision::SignalScore;
use crate::domain::models::documents::{
    EngagementSummary, PromotionEvent, SlugOverride, WorthinessEntry,
};

/// Points for a public proof artifact.
const PUBLIC_PROOF_POINTS: u32 = 15;
/// Points per proven claim.
const POINTS_PER_CLAIM: u32 = 3;
/// Proven claims counted toward the score.
const MAX_COUNTED_CLAIMS: u32 = 5;
/// Maximum engagement contribution.
const ENGAGEMENT_MAX: u32 = 30;
/// Maximum freshness contribution.
const FRESHNESS_MAX: u32 = 20;
/// Maximum worthiness contribution.
const WORTHINESS_MAX: u32 = 20;

/// Proof dimension: +15 for a public proof flag, +3 per proven claim up to
/// five claims. Range 0–30.
pub fn proof_signal(slug: &str, overrides: &BTreeMap<String, SlugOverride>) -> SignalScore {
    let Some(entry) = overrides.get(slug) else {
        return SignalScore::new(0, "proof: 0/30 (no overrides recorded)");
    };

    let proof_points = if entry.public_proof {
        PUBLIC_PROOF_POINTS
    } else {
        0
    };
    let counted_claims = (entry.proven_claims.len() as u32).min(MAX_COUNTED_CLAIMS);
    let claim_points = counted_claims * POINTS_PER_CLAIM;
    let score = proof_points + claim_points;

    SignalScore::new(
        score,
        format!(
            "proof: {score}/30 (public proof +{proof_points}, {counted_claims} proven claims +{claim_points})"
        ),
    )
}

/// Engagement dimension: reply rate over all tracked outcomes, scaled to 30.
/// Absent data scores 0, not an error.
pub fn engagement_signal(slug: &str, engagement: &EngagementSummary) -> SignalScore {
    let Some(counts) = engagement.slugs.get(slug) else {
        return SignalScore::new(0, "engagement: 0/30 (no engagement data)");
    };
    if counts.total() == 0 {
        return SignalScore::new(0, "engagement: 0/30 (no engagement data)");
    }

    let rate = counts.reply_rate();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = ((rate * f64::from(ENGAGEMENT_MAX)).round() as u32).min(ENGAGEMENT_MAX);

    SignalScore::new(
        score,
        format!(
            "engagement: {score}/30 (reply rate {:.1}% over {} outcomes)",
            rate * 100.0,
            counts.total()
        ),
    )
}

/// Freshness dimension: full 20 points unless the slug was promoted within
/// the governance cooldown window, in which case the score is 0 and the
/// candidate is deferred.
///
/// The history document is ordered newest-first, so the first event that
/// names the slug is its most recent promotion.
pub fn freshness_signal(
    slug: &str,
    history: &[PromotionEvent],
    today: NaiveDate,
    cooldown_days: i64,
) -> SignalScore {
    let last_promotion = history
        .iter()
        .find(|event| event.promoted_slugs.iter().any(|s| s == slug))
        .map(|event| event.date);

    let Some(promoted_on) = last_promotion else {
        return SignalScore::new(FRESHNESS_MAX, "freshness: 20/20 (never promoted)");
    };

    let days_since = (today - promoted_on).num_days();
    if days_since < cooldown_days {
        SignalScore::deferred(format!(
            "freshness: 0/20 (promoted {days_since} days ago, within {cooldown_days}-day cooldown; defer)"
        ))
    } else {
        SignalScore::new(
            FRESHNESS_MAX,
            format!("freshness: 20/20 (last promoted {days_since} days ago)"),
        )
    }
}

/// Worthiness dimension: +20 iff the external rubric marks the slug worthy.
pub fn worthiness_signal(slug: &str, rubric: &BTreeMap<String, WorthinessEntry>) -> SignalScore {
    match rubric.get(slug) {
        Some(entry) if entry.worthy => SignalScore::new(
            WORTHINESS_MAX,
            "worthiness: 20/20 (rubric marks slug worthy)",
        ),
        Some(_) => SignalScore::new(0, "worthiness: 0/20 (rubric does not mark slug worthy)"),
        None => SignalScore::new(0, "worthiness: 0/20 (no rubric result)"),
    }
}
