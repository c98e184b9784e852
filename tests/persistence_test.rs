//! Integration tests for the result store and export wrapper
//!
//! Each test uses its own isolated temp directory so no state leaks
//! between runs.

use readyscope::catalog::Catalog;
use readyscope::config::ScoringConfig;
use readyscope::models::{Answer, AssessmentReport};
use readyscope::scoring::ScoringEngine;
use readyscope::store::{ResultStore, StoreError};

fn scored_result() -> readyscope::models::AssessmentResult {
    let catalog = Catalog::new();
    let config = ScoringConfig::default();
    let engine = ScoringEngine::new(&catalog, &config);
    engine.calculate(&[
        Answer::new("psych_1", 4.0),
        Answer::new("tech_1", "C#"),
        Answer::new("wiscar_2", 3.0),
    ])
}

#[test]
fn save_then_load_preserves_the_result() {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::open(dir.path());

    let result = scored_result();
    store.save(&result).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.overall_score, result.overall_score);
    assert_eq!(loaded.recommendation, result.recommendation);
    assert_eq!(loaded.insights, result.insights);
}

#[test]
fn retake_clears_the_saved_result() {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::open(dir.path());

    store.save(&scored_result()).unwrap();
    assert!(store.exists());

    assert!(store.clear().unwrap());
    assert!(matches!(store.load(), Err(StoreError::NotFound)));
}

#[test]
fn persisted_blob_is_the_camel_case_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::open(dir.path());
    store.save(&scored_result()).unwrap();

    let raw = std::fs::read_to_string(store.result_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json.get("overallScore").is_some());
    assert!(json.get("nextSteps").is_some());
}

#[test]
fn export_wrapper_carries_timestamp_and_summary() {
    let result = scored_result();
    let overall = result.overall_score;
    let report = AssessmentReport::new(result);

    assert!(report
        .summary
        .contains(&format!("Overall Score: {}%", overall)));

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("timestamp").is_some());
    assert_eq!(json["results"]["overallScore"], overall);

    // The wrapper must round-trip for re-import tooling
    let back: AssessmentReport = serde_json::from_value(json).unwrap();
    assert_eq!(back.results.overall_score, overall);
}
