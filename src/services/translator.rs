//! Recommendation translator: maps one advisory recommendation into a patch,
//! an advisory note, or a frozen action.
//!
//! Pure function of `(Recommendation, Governance, MutableState)`. The match
//! over categories is closed: the six known categories plus an explicit
//! unknown-fallback arm, which is reachable and tested. Silently dropping an
//! unrecognized category would be a correctness bug.

use serde_json::json;

use crate::domain::models::experiment::ExperimentStatus;
use crate::domain::models::governance::Governance;
use crate::domain::models::patch::{targets, MutableState, Note, Patch, TranslationOutcome};
use crate::domain::models::recommendation::{Recommendation, RecommendationCategory};

/// Translate one recommendation against the current (possibly evolving)
/// mutable state. Only `re-feature` and `experiment-graduation` can ever
/// produce a data-mutating patch; the rest are always advisory.
pub fn translate(
    rec: &Recommendation,
    governance: &Governance,
    state: &MutableState,
) -> TranslationOutcome {
    match &rec.category {
        RecommendationCategory::ReFeature => translate_re_feature(rec, governance, state),
        RecommendationCategory::ExperimentGraduation => {
            translate_graduation(rec, governance, state)
        }
        RecommendationCategory::ImproveProof
        | RecommendationCategory::StuckSubmission
        | RecommendationCategory::LintPromotion => {
            TranslationOutcome::Advisory(Note::new(
                rec.category.clone(),
                &rec.slug,
                insight_text(rec),
            ))
        }
        RecommendationCategory::Unknown(raw) => TranslationOutcome::Advisory(Note::new(
            rec.category.clone(),
            &rec.slug,
            format!("unrecognized recommendation category '{raw}'"),
        )),
    }
}

fn translate_re_feature(
    rec: &Recommendation,
    governance: &Governance,
    state: &MutableState,
) -> TranslationOutcome {
    if governance.decisions_frozen {
        return TranslationOutcome::Frozen(Note::new(
            rec.category.clone(),
            &rec.slug,
            format!(
                "promotion queue frozen by governance; re-feature of '{}' not applied",
                rec.slug
            ),
        ));
    }

    if state.queue.contains(&rec.slug) {
        return TranslationOutcome::Advisory(Note::new(
            rec.category.clone(),
            &rec.slug,
            format!("'{}' already in queue", rec.slug),
        ));
    }

    let capacity = governance.max_promos_per_week as usize;
    if state.queue.len() >= capacity {
        return TranslationOutcome::Advisory(Note::new(
            rec.category.clone(),
            &rec.slug,
            format!("queue full ({capacity} slots); '{}' not added", rec.slug),
        ));
    }

    // Rebuild the full slug list so the patch stays one shallow merge.
    let mut slugs: Vec<serde_json::Value> = state
        .queue
        .slugs
        .iter()
        .map(|entry| serde_json::to_value(entry).unwrap_or(serde_json::Value::Null))
        .collect();
    slugs.push(json!(rec.slug));
    let new_len = slugs.len();

    TranslationOutcome::Patch(Patch {
        category: rec.category.clone(),
        slug: rec.slug.clone(),
        target: targets::PROMOTION_QUEUE.to_string(),
        description: format!("append '{}' to the promotion queue", rec.slug),
        apply: json!({ "slugs": slugs }),
        risk_note: format!(
            "promotion queue at {new_len}/{capacity} after adding '{}'",
            rec.slug
        ),
    })
}

fn translate_graduation(
    rec: &Recommendation,
    governance: &Governance,
    state: &MutableState,
) -> TranslationOutcome {
    if governance.experiments_frozen {
        return TranslationOutcome::Frozen(Note::new(
            rec.category.clone(),
            &rec.slug,
            format!(
                "experiment roster frozen by governance; graduation of '{}' not applied",
                rec.slug
            ),
        ));
    }

    let Some(experiment) = state.roster.find(&rec.slug) else {
        return TranslationOutcome::Advisory(Note::new(
            rec.category.clone(),
            &rec.slug,
            format!("experiment '{}' not found", rec.slug),
        ));
    };

    if experiment.status == ExperimentStatus::Concluded {
        return TranslationOutcome::Advisory(Note::new(
            rec.category.clone(),
            &rec.slug,
            format!("experiment '{}' already concluded", rec.slug),
        ));
    }

    // Rebuild the full experiment array with this one concluded, keeping the
    // patch a single shallow merge against the roster document.
    let experiments: Vec<serde_json::Value> = state
        .roster
        .experiments
        .iter()
        .map(|e| {
            let mut updated = e.clone();
            if updated.id == rec.slug {
                updated.status = ExperimentStatus::Concluded;
            }
            serde_json::to_value(&updated).unwrap_or(serde_json::Value::Null)
        })
        .collect();

    TranslationOutcome::Patch(Patch {
        category: rec.category.clone(),
        slug: rec.slug.clone(),
        target: targets::EXPERIMENT_ROSTER.to_string(),
        description: format!("conclude experiment '{}'", rec.slug),
        apply: json!({ "experiments": experiments }),
        risk_note: format!("experiment '{}' concluded", rec.slug),
    })
}

fn insight_text(rec: &Recommendation) -> String {
    if rec.evidence.is_empty() {
        format!("{} advisory for '{}'", rec.category.as_str(), rec.slug)
    } else {
        rec.evidence.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::documents::{PromotionQueue, QueueEntry};
    use crate::domain::models::experiment::{Experiment, ExperimentRoster};

    fn rec(category: &str, slug: &str) -> Recommendation {
        Recommendation {
            category: RecommendationCategory::from(category.to_string()),
            slug: slug.to_string(),
            evidence: String::new(),
            priority: 1,
        }
    }

    fn state_with_queue(slugs: &[&str]) -> MutableState {
        MutableState {
            queue: PromotionQueue {
                week: "2026-W31".to_string(),
                slugs: slugs
                    .iter()
                    .map(|s| QueueEntry::Slug((*s).to_string()))
                    .collect(),
                promotion_type: "weekly".to_string(),
            },
            roster: ExperimentRoster::default(),
        }
    }

    #[test]
    fn test_re_feature_frozen() {
        let governance = Governance {
            decisions_frozen: true,
            ..Governance::default()
        };
        let outcome = translate(&rec("re-feature", "tool-x"), &governance, &MutableState::default());
        assert!(matches!(outcome, TranslationOutcome::Frozen(_)));
    }

    #[test]
    fn test_re_feature_already_queued() {
        let outcome = translate(
            &rec("re-feature", "tool-x"),
            &Governance::default(),
            &state_with_queue(&["tool-x"]),
        );
        match outcome {
            TranslationOutcome::Advisory(note) => assert!(note.note.contains("already in queue")),
            other => panic!("expected advisory, got {other:?}"),
        }
    }

    #[test]
    fn test_re_feature_queue_full() {
        let governance = Governance {
            max_promos_per_week: 2,
            ..Governance::default()
        };
        let outcome = translate(
            &rec("re-feature", "tool-z"),
            &governance,
            &state_with_queue(&["a", "b"]),
        );
        match outcome {
            TranslationOutcome::Advisory(note) => assert!(note.note.contains("queue full")),
            other => panic!("expected advisory, got {other:?}"),
        }
    }

    #[test]
    fn test_re_feature_produces_append_patch() {
        let outcome = translate(
            &rec("re-feature", "tool-z"),
            &Governance::default(),
            &state_with_queue(&["a"]),
        );
        match outcome {
            TranslationOutcome::Patch(patch) => {
                assert_eq!(patch.target, targets::PROMOTION_QUEUE);
                let slugs = patch.apply["slugs"].as_array().unwrap();
                assert_eq!(slugs.len(), 2);
                assert_eq!(slugs[1], "tool-z");
                assert!(patch.risk_note.contains("2/3"));
            }
            other => panic!("expected patch, got {other:?}"),
        }
    }

    #[test]
    fn test_graduation_frozen() {
        let governance = Governance {
            experiments_frozen: true,
            ..Governance::default()
        };
        let outcome = translate(
            &rec("experiment-graduation", "exp-1"),
            &governance,
            &MutableState::default(),
        );
        assert!(matches!(outcome, TranslationOutcome::Frozen(_)));
    }

    #[test]
    fn test_graduation_not_found() {
        let outcome = translate(
            &rec("experiment-graduation", "exp-missing"),
            &Governance::default(),
            &MutableState::default(),
        );
        match outcome {
            TranslationOutcome::Advisory(note) => assert!(note.note.contains("not found")),
            other => panic!("expected advisory, got {other:?}"),
        }
    }

    #[test]
    fn test_graduation_already_concluded() {
        let mut state = MutableState::default();
        state.roster.experiments.push(Experiment {
            id: "exp-1".to_string(),
            status: ExperimentStatus::Concluded,
            slugs: vec![],
        });

        let outcome = translate(
            &rec("experiment-graduation", "exp-1"),
            &Governance::default(),
            &state,
        );
        match outcome {
            TranslationOutcome::Advisory(note) => {
                assert!(note.note.contains("already concluded"));
            }
            other => panic!("expected advisory, got {other:?}"),
        }
    }

    #[test]
    fn test_graduation_patch_concludes_experiment() {
        let mut state = MutableState::default();
        state.roster.experiments.push(Experiment {
            id: "exp-1".to_string(),
            status: ExperimentStatus::Active,
            slugs: vec!["tool-x".to_string()],
        });

        let outcome = translate(
            &rec("experiment-graduation", "exp-1"),
            &Governance::default(),
            &state,
        );
        match outcome {
            TranslationOutcome::Patch(patch) => {
                assert_eq!(patch.target, targets::EXPERIMENT_ROSTER);
                let experiments = patch.apply["experiments"].as_array().unwrap();
                assert_eq!(experiments[0]["status"], "concluded");
            }
            other => panic!("expected patch, got {other:?}"),
        }
    }

    #[test]
    fn test_advisory_categories_carry_insight() {
        for category in ["improve-proof", "stuck-submission", "lint-promotion"] {
            let mut recommendation = rec(category, "tool-x");
            recommendation.evidence = "needs a published benchmark".to_string();

            let outcome = translate(
                &recommendation,
                &Governance::default(),
                &MutableState::default(),
            );
            match outcome {
                TranslationOutcome::Advisory(note) => {
                    assert_eq!(note.note, "needs a published benchmark");
                }
                other => panic!("expected advisory for {category}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_category_becomes_flagged_advisory() {
        let outcome = translate(
            &rec("paint-the-shed", "tool-x"),
            &Governance::default(),
            &MutableState::default(),
        );
        match outcome {
            TranslationOutcome::Advisory(note) => {
                assert!(note.note.contains("unrecognized"));
                assert!(note.note.contains("paint-the-shed"));
            }
            other => panic!("expected advisory, got {other:?}"),
        }
    }
}
