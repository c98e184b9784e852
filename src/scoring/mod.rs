//! Assessment scoring
//!
//! Converts an ordered sequence of answers into an `AssessmentResult`:
//! category scores, the WISCAR sub-score table, the overall score, a
//! recommendation tier, and the generated narrative text. Pure and
//! deterministic; all degenerate inputs degrade to zero contributions
//! instead of failing.

mod engine;
pub mod narrative;

pub use engine::{ScoreBreakdown, ScoringEngine};
