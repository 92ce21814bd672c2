//! Budget allocator: converts the cost projection into an integer number of
//! promotions allowed this cycle.

use tracing::warn;

use crate::domain::models::decision::Budget;
use crate::domain::models::documents::CostProjection;
use crate::domain::models::governance::Governance;

/// The derived budget plus any warnings raised while deriving it.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOutcome {
    /// The budget the ranker will operate under.
    pub budget: Budget,

    /// Non-fatal warnings (e.g. zero headroom for even one promotion).
    pub warnings: Vec<String>,
}

/// Derive the cycle budget from the cost projection at an explicit tier.
///
/// With no run history (`avg_minutes_per_run == 0`) cost does not constrain
/// the cycle and the governance cap applies alone. A zero result with a
/// positive average is a warning, not an error: the pass still completes with
/// every non-deferred candidate skipped.
pub fn allocate_budget(
    projection: &CostProjection,
    governance: &Governance,
    tier: u32,
) -> BudgetOutcome {
    let headroom = projection.headroom_for_tier(tier);
    let avg = projection.avg_minutes_per_run;
    let cap = governance.max_promos_per_week;

    let mut warnings = Vec::new();

    let items_allowed = if avg <= 0.0 {
        cap
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let affordable = (headroom / avg).floor().max(0.0) as u32;
        let allowed = cap.min(affordable);
        if allowed == 0 {
            let message = format!(
                "even one promotion would exceed the tier-{tier} budget \
                 (headroom {headroom:.1} min, avg {avg:.1} min/run)"
            );
            warn!("{message}");
            warnings.push(message);
        }
        allowed
    };

    BudgetOutcome {
        budget: Budget {
            tier,
            headroom,
            items_allowed,
        },
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::documents::TierBudget;

    fn projection(headroom: f64, avg: f64) -> CostProjection {
        let mut projection = CostProjection {
            avg_minutes_per_run: avg,
            ..CostProjection::default()
        };
        projection
            .tiers
            .insert("200".to_string(), TierBudget { headroom });
        projection
    }

    fn governance_with_cap(cap: u32) -> Governance {
        Governance {
            max_promos_per_week: cap,
            ..Governance::default()
        }
    }

    #[test]
    fn test_no_history_falls_back_to_governance_cap() {
        let outcome = allocate_budget(&projection(100.0, 0.0), &governance_with_cap(3), 200);
        assert_eq!(outcome.budget.items_allowed, 3);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_cost_constrains_below_cap() {
        // floor(100 / 40) = 2 < cap 3
        let outcome = allocate_budget(&projection(100.0, 40.0), &governance_with_cap(3), 200);
        assert_eq!(outcome.budget.items_allowed, 2);
    }

    #[test]
    fn test_cap_constrains_below_cost() {
        // floor(500 / 10) = 50, cap 3 wins
        let outcome = allocate_budget(&projection(500.0, 10.0), &governance_with_cap(3), 200);
        assert_eq!(outcome.budget.items_allowed, 3);
    }

    #[test]
    fn test_zero_allowance_warns() {
        // floor(10 / 50) = 0 with positive avg → warning, not error
        let outcome = allocate_budget(&projection(10.0, 50.0), &governance_with_cap(3), 200);
        assert_eq!(outcome.budget.items_allowed, 0);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("even one promotion"));
    }

    #[test]
    fn test_missing_tier_means_zero_headroom() {
        let projection = CostProjection {
            avg_minutes_per_run: 10.0,
            ..CostProjection::default()
        };
        let outcome = allocate_budget(&projection, &governance_with_cap(3), 200);
        assert_eq!(outcome.budget.items_allowed, 0);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_tier_is_an_explicit_parameter() {
        let mut projection = projection(0.0, 10.0);
        projection
            .tiers
            .insert("500".to_string(), TierBudget { headroom: 100.0 });

        let outcome = allocate_budget(&projection, &governance_with_cap(3), 500);
        assert_eq!(outcome.budget.tier, 500);
        assert_eq!(outcome.budget.items_allowed, 3);
    }
}
