//! Assessment scoring engine
//!
//! Implements the WISCAR readiness formula: psychometric and technical
//! category scores plus a six-dimension WISCAR pillar, averaged into an
//! overall score. The inner WISCAR average (over six dimensions, including
//! the realWorld placeholder) and the outer three-pillar average are both
//! computed on unrounded values; rounding happens once, on the way into
//! the result. Thresholds (recommendation tiers, insight bands, skill-gap
//! bars) are then evaluated on the rounded integers so the emitted
//! document is internally consistent.

use crate::catalog::Catalog;
use crate::config::{ScoreSource, ScoringConfig};
use crate::models::{
    Answer, AssessmentResult, Category, Question, QuestionType, Recommendation, SkillGap,
    WiscarDimension, WiscarScores,
};
use crate::scoring::narrative::{self, ScoreSnapshot};
use tracing::{debug, info};

/// Unrounded intermediate values, kept for score explanation
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Psychometric pillar (mean Likert value normalized to 0-100)
    pub psychometric: f64,
    /// Technical pillar (answer-key accuracy as a percentage)
    pub technical: f64,
    /// Per-dimension WISCAR values, in fixed dimension order
    pub wiscar: Vec<(WiscarDimension, f64)>,
    /// Mean over all six WISCAR dimensions
    pub wiscar_average: f64,
    /// Unweighted mean of the three pillars
    pub overall: f64,
    /// Answers that matched a catalog question
    pub answered: usize,
    /// Answer identifiers with no catalog entry (skipped)
    pub unknown_ids: Vec<String>,
}

/// Catalog- and table-driven assessment scorer
pub struct ScoringEngine<'a> {
    catalog: &'a Catalog,
    config: &'a ScoringConfig,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a ScoringConfig) -> Self {
        Self { catalog, config }
    }

    /// Score an answer sequence into a complete result
    pub fn calculate(&self, answers: &[Answer]) -> AssessmentResult {
        self.calculate_with_breakdown(answers).0
    }

    /// Score an answer sequence, also returning the unrounded breakdown
    pub fn calculate_with_breakdown(&self, answers: &[Answer]) -> (AssessmentResult, ScoreBreakdown) {
        // Partition by the category carried on the catalog question.
        // Answers whose id has no catalog entry belong to no bucket.
        let mut psych: Vec<&Answer> = Vec::new();
        let mut tech: Vec<&Answer> = Vec::new();
        let mut wiscar: Vec<(&Question, &Answer)> = Vec::new();
        let mut unknown_ids = Vec::new();

        for answer in answers {
            match self.catalog.get(&answer.question_id) {
                Some(question) => match question.category {
                    Category::Psychometric => psych.push(answer),
                    Category::Technical => tech.push(answer),
                    Category::Wiscar => wiscar.push((question, answer)),
                },
                None => {
                    debug!("Skipping answer for unknown question '{}'", answer.question_id);
                    unknown_ids.push(answer.question_id.clone());
                }
            }
        }

        let psychometric = self.psychometric_score(&psych);
        let technical = self.technical_score(&tech);

        let wiscar_values: Vec<(WiscarDimension, f64)> = WiscarDimension::MEASURED
            .iter()
            .map(|&dim| (dim, self.wiscar_sub_score(&wiscar, dim)))
            .chain(std::iter::once((
                WiscarDimension::RealWorld,
                self.config.real_world_score,
            )))
            .collect();

        // WISCAR is first averaged across its six dimensions, then treated
        // as a single third pillar. Both divisors are load-bearing.
        let wiscar_average =
            wiscar_values.iter().map(|(_, v)| v).sum::<f64>() / wiscar_values.len() as f64;
        let overall = (psychometric + technical + wiscar_average) / 3.0;

        debug!(
            "Pillars: psychometric={:.2}, technical={:.2}, wiscar={:.2} -> overall={:.2}",
            psychometric, technical, wiscar_average, overall
        );

        let wiscar_scores = WiscarScores {
            will: round(value_for(&wiscar_values, WiscarDimension::Will)),
            interest: round(value_for(&wiscar_values, WiscarDimension::Interest)),
            skill: round(value_for(&wiscar_values, WiscarDimension::Skill)),
            cognitive: round(value_for(&wiscar_values, WiscarDimension::Cognitive)),
            ability: round(value_for(&wiscar_values, WiscarDimension::Ability)),
            real_world: round(value_for(&wiscar_values, WiscarDimension::RealWorld)),
        };

        let psychometric_score = round(psychometric);
        let technical_score = round(technical);
        let overall_score = round(overall);
        let recommendation = self.recommendation(overall_score);

        let snapshot = ScoreSnapshot {
            psychometric: psychometric_score,
            technical: technical_score,
            interest: wiscar_scores.interest,
            skill: wiscar_scores.skill,
            recommendation,
        };

        let result = AssessmentResult {
            psychometric_score,
            technical_score,
            wiscar_scores,
            overall_score,
            recommendation,
            insights: narrative::insights(&snapshot),
            next_steps: narrative::next_steps(&snapshot),
            skill_gaps: self.skill_gaps(psychometric_score, technical_score, &wiscar_scores),
        };

        info!(
            "Assessment scored: overall={} ({}), psychometric={}, technical={}",
            result.overall_score, result.recommendation, result.psychometric_score,
            result.technical_score
        );

        let breakdown = ScoreBreakdown {
            psychometric,
            technical,
            wiscar: wiscar_values,
            wiscar_average,
            overall,
            answered: psych.len() + tech.len() + wiscar.len(),
            unknown_ids,
        };

        (result, breakdown)
    }

    /// Mean of the 1-5 Likert values, normalized to 0-100.
    /// Non-numeric values contribute 0 but stay in the denominator.
    fn psychometric_score(&self, answers: &[&Answer]) -> f64 {
        if answers.is_empty() {
            return 0.0;
        }
        let sum: f64 = answers
            .iter()
            .map(|a| a.value.as_number().unwrap_or(0.0))
            .sum();
        (sum / answers.len() as f64 / 5.0) * 100.0
    }

    /// Percentage of technical answers exactly matching the answer key.
    /// No partial credit; the string match is exact including case.
    fn technical_score(&self, answers: &[&Answer]) -> f64 {
        if answers.is_empty() {
            return 0.0;
        }
        let correct = answers
            .iter()
            .filter(|a| {
                match (self.config.answer_key.get(&a.question_id), a.value.as_text()) {
                    (Some(correct), Some(given)) => correct == given,
                    // Unkeyed identifiers and non-literal values never count
                    _ => false,
                }
            })
            .count();
        (correct as f64 / answers.len() as f64) * 100.0
    }

    /// Mean contribution for one WISCAR dimension, selected by the
    /// question's subcategory tag. No answers for the dimension yields 0.
    fn wiscar_sub_score(&self, answers: &[(&Question, &Answer)], dimension: WiscarDimension) -> f64 {
        let scores: Vec<f64> = answers
            .iter()
            .filter(|(q, _)| WiscarDimension::from_subcategory(&q.subcategory) == Some(dimension))
            .map(|(q, a)| self.answer_score(q, a))
            .collect();

        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().sum::<f64>() / scores.len() as f64
    }

    /// Convert one WISCAR answer into a 0-100 contribution
    fn answer_score(&self, question: &Question, answer: &Answer) -> f64 {
        if let Some(n) = answer.value.as_number() {
            return (n / 5.0) * 100.0;
        }

        let Some(text) = answer.value.as_text() else {
            return 0.0;
        };

        // Literal answers are valued through the fixed lookup tables;
        // unmatched literals default to 0.
        match question.question_type {
            QuestionType::MultipleChoice => {
                self.config.skill_levels.get(text).copied().unwrap_or(0.0)
            }
            QuestionType::Scenario => {
                self.config.scenario_scores.get(text).copied().unwrap_or(0.0)
            }
            _ => 0.0,
        }
    }

    /// Tier thresholds are inclusive at the lower bound of each tier
    fn recommendation(&self, overall: u32) -> Recommendation {
        if overall >= self.config.tiers.yes {
            Recommendation::Yes
        } else if overall >= self.config.tiers.maybe {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    fn skill_gaps(
        &self,
        psychometric: u32,
        technical: u32,
        wiscar: &WiscarScores,
    ) -> Vec<SkillGap> {
        self.config
            .skill_requirements
            .iter()
            .map(|row| {
                let current = match row.source {
                    ScoreSource::Technical => technical,
                    ScoreSource::Psychometric => psychometric,
                    ScoreSource::Will => wiscar.will,
                    ScoreSource::Interest => wiscar.interest,
                    ScoreSource::Skill => wiscar.skill,
                    ScoreSource::Cognitive => wiscar.cognitive,
                    ScoreSource::Ability => wiscar.ability,
                    ScoreSource::RealWorld => wiscar.real_world,
                };
                SkillGap {
                    skill: row.skill.clone(),
                    current,
                    required: row.required,
                    gap: current < row.required,
                }
            })
            .collect()
    }

    /// Generate a human-readable explanation of the score
    pub fn explain(&self, result: &AssessmentResult, breakdown: &ScoreBreakdown) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "# Overall Score: {} ({})\n",
            result.overall_score, result.recommendation
        ));

        lines.push("## Scoring Formula\n".to_string());
        lines.push("```".to_string());
        lines.push("Overall = (Psychometric + Technical + WISCAR) / 3".to_string());
        lines.push("WISCAR  = mean of 6 dimensions (realWorld is a fixed placeholder)".to_string());
        lines.push("```\n".to_string());

        lines.push("## Pillars\n".to_string());
        lines.push(format!(
            "- **Psychometric**: {:.2} (rounded: {})",
            breakdown.psychometric, result.psychometric_score
        ));
        lines.push(format!(
            "- **Technical**: {:.2} (rounded: {})",
            breakdown.technical, result.technical_score
        ));
        lines.push(format!(
            "- **WISCAR average**: {:.2} over {} dimensions\n",
            breakdown.wiscar_average,
            breakdown.wiscar.len()
        ));

        lines.push("## WISCAR Dimensions\n".to_string());
        for (dimension, value) in &breakdown.wiscar {
            let note = if *dimension == WiscarDimension::RealWorld {
                " (placeholder)"
            } else {
                ""
            };
            lines.push(format!("- {:?}: {:.1}{}", dimension, value, note));
        }
        lines.push(String::new());

        lines.push("## Skill Gaps\n".to_string());
        for gap in &result.skill_gaps {
            let marker = if gap.gap { "below bar" } else { "met" };
            lines.push(format!(
                "- {}: {} / {} ({})",
                gap.skill, gap.current, gap.required, marker
            ));
        }
        lines.push(String::new());

        lines.push(format!(
            "Answered: {} ({} unknown ids skipped)",
            breakdown.answered,
            breakdown.unknown_ids.len()
        ));

        lines.join("\n")
    }
}

fn value_for(values: &[(WiscarDimension, f64)], dimension: WiscarDimension) -> f64 {
    values
        .iter()
        .find(|(d, _)| *d == dimension)
        .map(|(_, v)| *v)
        .unwrap_or(0.0)
}

/// Round to nearest integer; applied once per output field, never to the
/// intermediate pillar values
fn round(value: f64) -> u32 {
    value.round() as u32
}
