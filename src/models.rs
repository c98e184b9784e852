//! Core data models for Readyscope
//!
//! These models are used throughout the codebase for representing
//! questions, collected answers, and assessment results. The JSON shape
//! of `AssessmentResult` is camelCase for compatibility with the web
//! client that originally consumed it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three fixed assessment categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Psychometric => write!(f, "psychometric"),
            Category::Technical => write!(f, "technical"),
            Category::Wiscar => write!(f, "wiscar"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" | "psych" => Ok(Category::Psychometric),
            "technical" | "tech" => Ok(Category::Technical),
            "wiscar" => Ok(Category::Wiscar),
            _ => Err(format!(
                "Unknown category '{}'. Valid categories: psychometric, technical, wiscar",
                s
            )),
        }
    }
}

/// Question presentation/answer formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Likert,
    MultipleChoice,
    TrueFalse,
    Scenario,
}

/// Ordinal answer scale for Likert items (1..=5 with one label per step)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scale {
    pub min: u8,
    pub max: u8,
    pub labels: Vec<String>,
}

/// A single questionnaire item from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub category: Category,
    pub subcategory: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

/// An answer value: either an ordinal on the question's scale or one of
/// its literal choice strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s.as_str()),
            AnswerValue::Number(_) => None,
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

/// One collected answer, produced at submission time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    pub timestamp: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The five measured WISCAR sub-dimensions plus the real-world placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    /// The five dimensions that are derived from answers (everything
    /// except the `realWorld` placeholder)
    pub const MEASURED: [WiscarDimension; 5] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
    ];

    /// Parse a catalog subcategory tag into a measured dimension
    pub fn from_subcategory(tag: &str) -> Option<Self> {
        match tag {
            "will" => Some(WiscarDimension::Will),
            "interest" => Some(WiscarDimension::Interest),
            "skill" => Some(WiscarDimension::Skill),
            "cognitive" => Some(WiscarDimension::Cognitive),
            "ability" => Some(WiscarDimension::Ability),
            _ => None,
        }
    }
}

/// WISCAR sub-scores, each rounded to an integer in [0,100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability: u32,
    pub real_world: u32,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u32 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }
}

/// Three-tier readiness recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Yes => write!(f, "yes"),
            Recommendation::Maybe => write!(f, "maybe"),
            Recommendation::No => write!(f, "no"),
        }
    }
}

impl Recommendation {
    /// Short reader-facing headline for each tier
    pub fn headline(&self) -> &'static str {
        match self {
            Recommendation::Yes => "AR/VR development is an excellent fit for you",
            Recommendation::Maybe => "AR/VR development could be a good fit with preparation",
            Recommendation::No => "Consider building foundations before AR/VR development",
        }
    }
}

/// A named competency paired with the measured score and a fixed bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current: u32,
    pub required: u32,
    pub gap: bool,
}

/// Complete output of the scoring engine.
///
/// Every score field is an integer in [0,100]; `recommendation`,
/// `insights`, `next_steps`, and the `gap` flags are all derived from the
/// rounded integer scores so the emitted document is self-consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub psychometric_score: u32,
    pub technical_score: u32,
    pub wiscar_scores: WiscarScores,
    pub overall_score: u32,
    pub recommendation: Recommendation,
    pub insights: Vec<String>,
    pub next_steps: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
}

/// Downloadable report wrapper around an `AssessmentResult`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub timestamp: DateTime<Utc>,
    pub results: AssessmentResult,
    pub summary: String,
}

impl AssessmentReport {
    pub fn new(results: AssessmentResult) -> Self {
        let summary = format!(
            "AR/VR Developer Assessment Results - Overall Score: {}%",
            results.overall_score
        );
        Self {
            timestamp: Utc::now(),
            results,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_value_untagged_serde() {
        let n: AnswerValue = serde_json::from_str("4").unwrap();
        assert_eq!(n.as_number(), Some(4.0));

        let s: AnswerValue = serde_json::from_str("\"C#\"").unwrap();
        assert_eq!(s.as_text(), Some("C#"));

        assert_eq!(serde_json::to_string(&AnswerValue::Number(4.0)).unwrap(), "4.0");
        assert_eq!(serde_json::to_string(&AnswerValue::Text("C#".into())).unwrap(), "\"C#\"");
    }

    #[test]
    fn test_recommendation_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Recommendation::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&Recommendation::Maybe).unwrap(), "\"maybe\"");
        let r: Recommendation = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(r, Recommendation::No);
    }

    #[test]
    fn test_wiscar_scores_camel_case() {
        let scores = WiscarScores {
            real_world: 75,
            ..Default::default()
        };
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json["realWorld"], 75);
        assert_eq!(json["will"], 0);
    }

    #[test]
    fn test_question_type_kebab_case() {
        assert_eq!(
            serde_json::to_string(&QuestionType::MultipleChoice).unwrap(),
            "\"multiple-choice\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionType::TrueFalse).unwrap(),
            "\"true-false\""
        );
    }

    #[test]
    fn test_wiscar_dimension_from_subcategory() {
        assert_eq!(
            WiscarDimension::from_subcategory("will"),
            Some(WiscarDimension::Will)
        );
        assert_eq!(WiscarDimension::from_subcategory("openness"), None);
    }

    #[test]
    fn test_report_summary_mentions_overall_score() {
        let result = AssessmentResult {
            psychometric_score: 80,
            technical_score: 60,
            wiscar_scores: WiscarScores::default(),
            overall_score: 72,
            recommendation: Recommendation::Maybe,
            insights: vec![],
            next_steps: vec![],
            skill_gaps: vec![],
        };
        let report = AssessmentReport::new(result);
        assert!(report.summary.contains("72%"));
    }
}
