//! Static question catalog
//!
//! The fifteen-item questionnaire: five psychometric Likert items, five
//! technical multiple-choice items, and five WISCAR items. Catalog order
//! is presentation order. The catalog is immutable and built once per
//! process.

use crate::models::{Category, Question, QuestionType, Scale};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Global catalog instance
static GLOBAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Get or initialize the global question catalog
pub fn global_catalog() -> &'static Catalog {
    GLOBAL_CATALOG.get_or_init(Catalog::new)
}

/// The ordered question catalog with id lookup
#[derive(Debug)]
pub struct Catalog {
    questions: Vec<Question>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        let questions: Vec<Question> = psychometric_questions()
            .into_iter()
            .chain(technical_questions())
            .chain(wiscar_questions())
            .collect();

        let by_id = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();

        Self { questions, by_id }
    }

    /// All questions in presentation order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by its identifier
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).map(|&i| &self.questions[i])
    }

    /// Questions belonging to one category, in catalog order
    pub fn by_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn agreement_scale() -> Scale {
    Scale {
        min: 1,
        max: 5,
        labels: vec![
            "Strongly Disagree".into(),
            "Disagree".into(),
            "Neutral".into(),
            "Agree".into(),
            "Strongly Agree".into(),
        ],
    }
}

fn likert(id: &str, category: Category, subcategory: &str, prompt: &str, scale: Scale) -> Question {
    Question {
        id: id.into(),
        question_type: QuestionType::Likert,
        category,
        subcategory: subcategory.into(),
        prompt: prompt.into(),
        options: None,
        scale: Some(scale),
    }
}

fn choice(
    id: &str,
    question_type: QuestionType,
    category: Category,
    subcategory: &str,
    prompt: &str,
    options: &[&str],
) -> Question {
    Question {
        id: id.into(),
        question_type,
        category,
        subcategory: subcategory.into(),
        prompt: prompt.into(),
        options: Some(options.iter().map(|s| s.to_string()).collect()),
        scale: None,
    }
}

fn psychometric_questions() -> Vec<Question> {
    vec![
        likert(
            "psych_1",
            Category::Psychometric,
            "interest",
            "I enjoy creating 3D interactive experiences.",
            agreement_scale(),
        ),
        likert(
            "psych_2",
            Category::Psychometric,
            "openness",
            "I am excited by the possibility of creating virtual worlds that others can explore.",
            agreement_scale(),
        ),
        likert(
            "psych_3",
            Category::Psychometric,
            "persistence",
            "When debugging complex technical issues, I persist until I find the solution.",
            agreement_scale(),
        ),
        likert(
            "psych_4",
            Category::Psychometric,
            "creativity",
            "I often come up with creative solutions to technical problems.",
            agreement_scale(),
        ),
        likert(
            "psych_5",
            Category::Psychometric,
            "collaboration",
            "I work well in teams to achieve common goals.",
            agreement_scale(),
        ),
    ]
}

fn technical_questions() -> Vec<Question> {
    vec![
        choice(
            "tech_1",
            QuestionType::MultipleChoice,
            Category::Technical,
            "programming",
            "Which programming language is most commonly used for Unity development?",
            &["JavaScript", "Python", "C#", "C++"],
        ),
        choice(
            "tech_2",
            QuestionType::MultipleChoice,
            Category::Technical,
            "3d-math",
            "What does a quaternion represent in 3D graphics?",
            &["Position", "Scale", "Rotation", "Color"],
        ),
        choice(
            "tech_3",
            QuestionType::MultipleChoice,
            Category::Technical,
            "ar-vr",
            "What is the primary difference between AR and VR?",
            &[
                "AR is cheaper to develop than VR",
                "VR completely replaces reality while AR overlays digital content on reality",
                "AR requires more powerful hardware than VR",
                "VR is only for gaming while AR is for business",
            ],
        ),
        choice(
            "tech_4",
            QuestionType::MultipleChoice,
            Category::Technical,
            "spatial",
            "In 3D space, which axis typically represents \"up\"?",
            &["X-axis", "Y-axis", "Z-axis", "W-axis"],
        ),
        choice(
            "tech_5",
            QuestionType::MultipleChoice,
            Category::Technical,
            "optimization",
            "What is the most important factor for AR/VR performance optimization?",
            &[
                "High-resolution textures",
                "Complex animations",
                "Maintaining consistent frame rate",
                "Advanced lighting",
            ],
        ),
    ]
}

fn wiscar_questions() -> Vec<Question> {
    vec![
        choice(
            "wiscar_1",
            QuestionType::Scenario,
            Category::Wiscar,
            "will",
            "You encounter a complex bug that has taken you 3 days to solve with no progress. What do you do?",
            &[
                "Ask for help from a colleague immediately",
                "Take a break and approach it with fresh perspective",
                "Keep working until you solve it yourself",
                "Document the issue and move to other tasks",
            ],
        ),
        likert(
            "wiscar_2",
            Category::Wiscar,
            "interest",
            "I actively seek out new AR/VR technologies and trends in my free time.",
            Scale {
                min: 1,
                max: 5,
                labels: vec![
                    "Never".into(),
                    "Rarely".into(),
                    "Sometimes".into(),
                    "Often".into(),
                    "Always".into(),
                ],
            },
        ),
        choice(
            "wiscar_3",
            QuestionType::MultipleChoice,
            Category::Wiscar,
            "skill",
            "How would you rate your current programming experience?",
            &[
                "Complete beginner",
                "Some experience with tutorials",
                "Built several projects",
                "Professional experience",
            ],
        ),
        likert(
            "wiscar_4",
            Category::Wiscar,
            "cognitive",
            "I can easily visualize how 3D objects would look from different angles.",
            Scale {
                min: 1,
                max: 5,
                labels: vec![
                    "Very Difficult".into(),
                    "Difficult".into(),
                    "Moderate".into(),
                    "Easy".into(),
                    "Very Easy".into(),
                ],
            },
        ),
        likert(
            "wiscar_5",
            Category::Wiscar,
            "ability",
            "I enjoy learning from feedback and criticism of my work.",
            agreement_scale(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_fifteen_questions() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn test_five_questions_per_category() {
        let catalog = Catalog::new();
        for category in [Category::Psychometric, Category::Technical, Category::Wiscar] {
            assert_eq!(catalog.by_category(category).len(), 5, "{}", category);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::new();
        let ids: HashSet<&str> = catalog.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::new();
        let q = catalog.get("tech_2").expect("tech_2 exists");
        assert_eq!(q.category, Category::Technical);
        assert_eq!(q.subcategory, "3d-math");
        assert!(catalog.get("tech_99").is_none());
    }

    #[test]
    fn test_wiscar_subcategories_cover_all_measured_dimensions() {
        use crate::models::WiscarDimension;
        let catalog = Catalog::new();
        let dims: HashSet<WiscarDimension> = catalog
            .by_category(Category::Wiscar)
            .iter()
            .filter_map(|q| WiscarDimension::from_subcategory(&q.subcategory))
            .collect();
        assert_eq!(dims.len(), WiscarDimension::MEASURED.len());
    }

    #[test]
    fn test_likert_questions_carry_full_scales() {
        let catalog = Catalog::new();
        for q in catalog.questions() {
            if q.question_type == QuestionType::Likert {
                let scale = q.scale.as_ref().expect("likert question has a scale");
                assert_eq!(scale.min, 1);
                assert_eq!(scale.max, 5);
                assert_eq!(scale.labels.len(), 5);
            } else {
                let options = q.options.as_ref().expect("choice question has options");
                assert_eq!(options.len(), 4);
            }
        }
    }

    #[test]
    fn test_global_catalog_is_shared() {
        let a = global_catalog();
        let b = global_catalog();
        assert!(std::ptr::eq(a, b));
    }
}
