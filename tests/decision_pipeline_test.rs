//! End-to-end tests of the decision pass: documents in, ranked decisions out.

mod common;

use chrono::NaiveDate;
use common::Fixture;
use herald::application::DecisionPass;
use herald::domain::models::decision::DecisionAction;
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

/// Cooldown defer overrides ranking entirely: `a` outscores `b` on raw
/// signals but was promoted two days ago, so `b` takes the single slot.
#[tokio::test]
async fn defer_overrides_ranking_under_unit_budget() {
    let fixture = Fixture::empty();
    fixture.write_doc(
        "governance.json",
        &json!({
            "schemaVersion": 1,
            "maxPromosPerWeek": 1,
            "cooldownDaysPerSlug": 14
        }),
    );
    fixture.write_doc(
        "promotion-queue.json",
        &json!({ "week": "2026-W31", "slugs": ["a", "b"], "promotionType": "weekly" }),
    );
    fixture.write_doc(
        "overrides.json",
        &json!({
            "a": { "publicProof": true, "provenClaims": ["c1", "c2", "c3", "c4", "c5"] }
        }),
    );
    fixture.write_doc(
        "promotion-history.json",
        &json!([{ "date": "2026-07-30", "promotedSlugs": ["a"] }]),
    );

    let pass = DecisionPass::new(fixture.store.clone(), fixture.config.clone());
    let document = pass.run(today(), false).await.unwrap();

    let a = document.decisions.iter().find(|d| d.slug == "a").unwrap();
    let b = document.decisions.iter().find(|d| d.slug == "b").unwrap();

    // a: proof 30 but freshness 0 with defer
    assert_eq!(a.action, DecisionAction::Defer);
    assert_eq!(a.score, 30);
    assert!(a.explanation.iter().any(|line| line.contains("cooldown")));

    // b: freshness 20 only, and it wins the single slot
    assert_eq!(b.action, DecisionAction::Promote);
    assert_eq!(b.score, 20);

    // The decisions document was written.
    let on_disk = fixture.read_doc("decisions.json").unwrap();
    assert_eq!(on_disk["decisions"].as_array().unwrap().len(), 2);
}

/// Zero allowance with a positive average is a warning, not an error; the
/// pass completes with every non-deferred candidate skipped.
#[tokio::test]
async fn budget_zero_warns_and_skips_everyone() {
    let fixture = Fixture::empty();
    fixture.write_doc(
        "promotion-queue.json",
        &json!({ "week": "2026-W31", "slugs": ["a", "b"], "promotionType": "weekly" }),
    );
    fixture.write_doc(
        "cost-projection.json",
        &json!({
            "tiers": { "200": { "headroom": 10.0 } },
            "avgMinutesPerRun": 50.0
        }),
    );

    let pass = DecisionPass::new(fixture.store.clone(), fixture.config.clone());
    let document = pass.run(today(), false).await.unwrap();

    assert_eq!(document.budget.items_allowed, 0);
    assert_eq!(document.warnings.len(), 1);
    assert!(document.warnings[0].contains("even one promotion"));
    assert!(document
        .decisions
        .iter()
        .all(|d| d.action == DecisionAction::Skip));
}

/// Deferred candidates never consume budget: budget 1, two eligible plus one
/// deferred high scorer still promotes exactly one eligible candidate.
#[tokio::test]
async fn deferred_candidates_never_consume_budget() {
    let fixture = Fixture::empty();
    fixture.write_doc(
        "governance.json",
        &json!({ "schemaVersion": 1, "maxPromosPerWeek": 1, "cooldownDaysPerSlug": 14 }),
    );
    fixture.write_doc(
        "promotion-queue.json",
        &json!({ "week": "2026-W31", "slugs": ["cooled", "x", "y"], "promotionType": "weekly" }),
    );
    fixture.write_doc(
        "overrides.json",
        &json!({ "cooled": { "publicProof": true, "provenClaims": ["c1"] } }),
    );
    fixture.write_doc(
        "promotion-history.json",
        &json!([{ "date": "2026-07-31", "promotedSlugs": ["cooled"] }]),
    );
    fixture.write_doc(
        "worthiness.json",
        &json!({ "x": { "worthy": true, "score": 9.0 } }),
    );

    let pass = DecisionPass::new(fixture.store.clone(), fixture.config.clone());
    let document = pass.run(today(), true).await.unwrap();

    let actions: Vec<(String, DecisionAction)> = document
        .decisions
        .iter()
        .map(|d| (d.slug.clone(), d.action))
        .collect();

    let promoted = actions
        .iter()
        .filter(|(_, action)| *action == DecisionAction::Promote)
        .count();
    assert_eq!(promoted, 1);
    assert!(actions.contains(&("cooled".to_string(), DecisionAction::Defer)));
    assert!(actions.contains(&("y".to_string(), DecisionAction::Skip)));
}

/// Missing input documents degrade to empty defaults; the pass still
/// completes and writes an empty decision set.
#[tokio::test]
async fn missing_documents_fail_soft() {
    let fixture = Fixture::empty();

    let pass = DecisionPass::new(fixture.store.clone(), fixture.config.clone());
    let document = pass.run(today(), false).await.unwrap();

    assert!(document.decisions.is_empty());
    assert!(fixture.read_doc("decisions.json").is_some());
}

/// Experiment notes ride along in the explanation trace without changing
/// the numeric total.
#[tokio::test]
async fn experiment_notes_annotate_without_scoring() {
    let fixture = Fixture::empty();
    fixture.write_doc(
        "governance.json",
        &json!({ "schemaVersion": 1, "minExperimentDataThreshold": 5 }),
    );
    fixture.write_doc(
        "promotion-queue.json",
        &json!({ "week": "2026-W31", "slugs": ["a"], "promotionType": "weekly" }),
    );
    fixture.write_doc(
        "experiment-roster.json",
        &json!({ "experiments": [
            { "id": "exp-1", "status": "active", "slugs": ["a"] }
        ]}),
    );
    fixture.write_doc(
        "engagement.json",
        &json!({
            "slugs": {},
            "experiments": {
                "exp-1": {
                    "control": { "replied": 1, "ignored": 9 },
                    "variant-a": { "replied": 3, "ignored": 7 }
                }
            }
        }),
    );

    let pass = DecisionPass::new(fixture.store.clone(), fixture.config.clone());
    let document = pass.run(today(), true).await.unwrap();

    let decision = &document.decisions[0];
    // Four dimension lines plus one experiment note.
    assert_eq!(decision.explanation.len(), 5);
    assert!(decision.explanation[4].contains("variant-a outperforms at 3.0x"));
    // Engagement data exists only for experiment arms, so the total is
    // freshness alone.
    assert_eq!(decision.score, 20);
}
