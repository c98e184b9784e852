//! Integration tests for the scoring engine
//!
//! Exercises the public library surface the way the CLI does: build the
//! catalog, score answer sequences, and check the published numeric
//! contract (rounding, tier boundaries, degrade-to-zero edge cases).

use readyscope::catalog::Catalog;
use readyscope::config::ScoringConfig;
use readyscope::models::{Answer, Recommendation};
use readyscope::scoring::ScoringEngine;

/// A complete, perfect answer sheet: every Likert at 5, every technical
/// answer from the key, the strongest skill/scenario literals
fn perfect_answers(catalog: &Catalog, config: &ScoringConfig) -> Vec<Answer> {
    catalog
        .questions()
        .iter()
        .map(|q| {
            if q.scale.is_some() {
                Answer::new(&q.id, 5.0)
            } else if let Some(correct) = config.answer_key.get(&q.id) {
                Answer::new(&q.id, correct.as_str())
            } else if q.id == "wiscar_3" {
                Answer::new(&q.id, "Professional experience")
            } else {
                Answer::new(&q.id, "Take a break and approach it with fresh perspective")
            }
        })
        .collect()
}

#[test]
fn perfect_run_recommends_yes() {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);

    let result = engine.calculate(&perfect_answers(&catalog, &config));

    assert_eq!(result.psychometric_score, 100);
    assert_eq!(result.technical_score, 100);
    // WISCAR = mean(85, 100, 100, 100, 100, 75) = 93.33
    // overall = (100 + 100 + 93.33) / 3 = 97.78 -> 98
    assert_eq!(result.overall_score, 98);
    assert_eq!(result.recommendation, Recommendation::Yes);
    assert_eq!(result.next_steps.len(), 3);
    assert!(result.skill_gaps.iter().all(|g| !g.gap));
}

#[test]
fn empty_run_scores_four_overall() {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);

    let result = engine.calculate(&[]);

    assert_eq!(result.psychometric_score, 0);
    assert_eq!(result.technical_score, 0);
    assert_eq!(result.wiscar_scores.real_world, 75);
    // round((0 + 0 + 75/6) / 3) = 4
    assert_eq!(result.overall_score, 4);
    assert_eq!(result.recommendation, Recommendation::No);
    // weak-pillar extras fire on top of the "no" tier steps
    assert_eq!(result.next_steps.len(), 5);
}

#[test]
fn all_scores_are_percentages() {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);

    for answers in [
        vec![],
        perfect_answers(&catalog, &config),
        vec![Answer::new("psych_1", 1.0), Answer::new("wiscar_2", 1.0)],
    ] {
        let result = engine.calculate(&answers);
        let scores = [
            result.psychometric_score,
            result.technical_score,
            result.overall_score,
            result.wiscar_scores.will,
            result.wiscar_scores.interest,
            result.wiscar_scores.skill,
            result.wiscar_scores.cognitive,
            result.wiscar_scores.ability,
            result.wiscar_scores.real_world,
        ];
        assert!(scores.iter().all(|&s| s <= 100), "{:?}", scores);
    }
}

#[test]
fn recommendation_tracks_rounded_overall() {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);

    let result = engine.calculate(&perfect_answers(&catalog, &config));
    match result.overall_score {
        s if s >= 80 => assert_eq!(result.recommendation, Recommendation::Yes),
        s if s >= 60 => assert_eq!(result.recommendation, Recommendation::Maybe),
        _ => assert_eq!(result.recommendation, Recommendation::No),
    }
}

#[test]
fn gap_flags_match_current_versus_required() {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);

    // Middling run: some gaps open, some closed
    let answers = vec![
        Answer::new("psych_1", 4.0),
        Answer::new("psych_2", 4.0),
        Answer::new("tech_1", "C#"),
        Answer::new("tech_2", "Position"),
        Answer::new("wiscar_1", "Keep working until you solve it yourself"),
        Answer::new("wiscar_2", 3.0),
    ];
    let result = engine.calculate(&answers);

    assert_eq!(result.skill_gaps.len(), 5);
    for gap in &result.skill_gaps {
        assert_eq!(gap.gap, gap.current < gap.required, "{}", gap.skill);
    }

    let required: Vec<u32> = result.skill_gaps.iter().map(|g| g.required).collect();
    assert_eq!(required, vec![80, 75, 70, 75, 80]);
}

#[test]
fn unmatched_literals_degrade_to_zero() {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);

    let answers = vec![
        Answer::new("wiscar_1", "Cry"),
        Answer::new("wiscar_3", "Grandmaster"),
    ];
    let result = engine.calculate(&answers);

    assert_eq!(result.wiscar_scores.will, 0);
    assert_eq!(result.wiscar_scores.skill, 0);
}

#[test]
fn scoring_is_deterministic() {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);
    let answers = perfect_answers(&catalog, &config);

    let a = engine.calculate(&answers);
    let b = engine.calculate(&answers);
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

#[test]
fn custom_tier_thresholds_shift_the_recommendation() {
    let catalog = Catalog::new();
    let mut config = ScoringConfig::default();
    // A perfect run scores 98 overall; push the yes bar above it
    config.tiers.yes = 99;

    let engine = ScoringEngine::new(&catalog, &config);
    let result = engine.calculate(&perfect_answers(&catalog, &ScoringConfig::default()));
    assert_eq!(result.overall_score, 98);
    assert_eq!(result.recommendation, Recommendation::Maybe);
}

#[test]
fn result_json_shape_matches_web_client() {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);

    let result = engine.calculate(&perfect_answers(&catalog, &config));
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("psychometricScore").is_some());
    assert!(json.get("technicalScore").is_some());
    assert!(json.get("overallScore").is_some());
    assert!(json["wiscarScores"].get("realWorld").is_some());
    assert_eq!(json["recommendation"], "yes");
    assert!(json["skillGaps"].is_array());
}

#[test]
fn answer_file_round_trip_through_serde() {
    // The `score` command's wire format: camelCase answers with either
    // numeric or literal values
    let raw = r#"[
        {"questionId": "psych_1", "value": 4, "timestamp": "2026-08-25T12:00:00Z"},
        {"questionId": "tech_1", "value": "C#", "timestamp": "2026-08-25T12:00:30Z"}
    ]"#;
    let answers: Vec<Answer> = serde_json::from_str(raw).unwrap();

    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);
    let result = engine.calculate(&answers);

    assert_eq!(result.psychometric_score, 80);
    assert_eq!(result.technical_score, 100);
}
