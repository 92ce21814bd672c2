//! Decision ranker: orders scored candidates and assigns actions under the
//! cycle budget.

use tracing::info;

use crate::domain::models::decision::{Decision, DecisionAction};

use super::scoring::ScoredCandidate;

/// Rank candidates by score and assign `promote`/`skip`/`defer`.
///
/// The sort is stable and descending by score, so ties keep input order.
/// Input order is the promotion queue's declared order, which means ties
/// favor earlier-queued candidates. Deferred candidates are always `defer`
/// and never consume budget.
pub fn rank_candidates(mut scored: Vec<ScoredCandidate>, items_allowed: u32) -> Vec<Decision> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let mut promoted = 0u32;
    let decisions: Vec<Decision> = scored
        .into_iter()
        .map(|candidate| {
            let action = if candidate.defer {
                DecisionAction::Defer
            } else if promoted < items_allowed {
                promoted += 1;
                DecisionAction::Promote
            } else {
                DecisionAction::Skip
            };

            Decision {
                slug: candidate.slug,
                action,
                score: candidate.score,
                explanation: candidate.explanation,
            }
        })
        .collect();

    info!(
        promoted,
        total = decisions.len(),
        "ranked candidates under budget"
    );
    decisions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(slug: &str, score: u32, defer: bool) -> ScoredCandidate {
        ScoredCandidate {
            slug: slug.to_string(),
            score,
            explanation: vec![],
            defer,
        }
    }

    fn action_of<'a>(decisions: &'a [Decision], slug: &str) -> DecisionAction {
        decisions.iter().find(|d| d.slug == slug).unwrap().action
    }

    #[test]
    fn test_promotes_top_scores_within_budget() {
        let decisions = rank_candidates(
            vec![
                candidate("low", 10, false),
                candidate("high", 90, false),
                candidate("mid", 50, false),
            ],
            2,
        );

        assert_eq!(decisions[0].slug, "high");
        assert_eq!(decisions[0].action, DecisionAction::Promote);
        assert_eq!(decisions[1].slug, "mid");
        assert_eq!(decisions[1].action, DecisionAction::Promote);
        assert_eq!(decisions[2].slug, "low");
        assert_eq!(decisions[2].action, DecisionAction::Skip);
    }

    #[test]
    fn test_ties_keep_queue_order() {
        let decisions = rank_candidates(
            vec![candidate("first", 40, false), candidate("second", 40, false)],
            1,
        );

        assert_eq!(decisions[0].slug, "first");
        assert_eq!(decisions[0].action, DecisionAction::Promote);
        assert_eq!(decisions[1].action, DecisionAction::Skip);
    }

    #[test]
    fn test_deferred_never_consume_budget() {
        // Budget 2, three eligible and two deferred: exactly two promote,
        // one skips, both deferred stay deferred regardless of score.
        let decisions = rank_candidates(
            vec![
                candidate("defer-high", 95, true),
                candidate("a", 80, false),
                candidate("b", 60, false),
                candidate("defer-low", 50, true),
                candidate("c", 40, false),
            ],
            2,
        );

        assert_eq!(action_of(&decisions, "defer-high"), DecisionAction::Defer);
        assert_eq!(action_of(&decisions, "defer-low"), DecisionAction::Defer);
        assert_eq!(action_of(&decisions, "a"), DecisionAction::Promote);
        assert_eq!(action_of(&decisions, "b"), DecisionAction::Promote);
        assert_eq!(action_of(&decisions, "c"), DecisionAction::Skip);
    }

    #[test]
    fn test_zero_budget_skips_everyone_eligible() {
        let decisions = rank_candidates(
            vec![candidate("a", 80, false), candidate("b", 60, true)],
            0,
        );

        assert_eq!(action_of(&decisions, "a"), DecisionAction::Skip);
        assert_eq!(action_of(&decisions, "b"), DecisionAction::Defer);
    }

    #[test]
    fn test_defer_overrides_ranking_entirely() {
        // a outscores b on raw signals but sits in cooldown, so b takes
        // the single slot.
        let decisions = rank_candidates(
            vec![candidate("a", 30, true), candidate("b", 20, false)],
            1,
        );

        assert_eq!(action_of(&decisions, "a"), DecisionAction::Defer);
        assert_eq!(action_of(&decisions, "b"), DecisionAction::Promote);
    }
}
