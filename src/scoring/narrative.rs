//! Narrative text generation
//!
//! Insights and next steps are not generative text: each is an ordered
//! list of (predicate, message) rules over the rounded output scores,
//! evaluated in one fixed pass. Every matching rule contributes its
//! message, in table order.

use crate::models::Recommendation;

/// The score fields the rule tables read
#[derive(Debug, Clone, Copy)]
pub struct ScoreSnapshot {
    pub psychometric: u32,
    pub technical: u32,
    pub interest: u32,
    pub skill: u32,
    pub recommendation: Recommendation,
}

/// One threshold-triggered message
pub struct Rule {
    pub applies: fn(&ScoreSnapshot) -> bool,
    pub message: &'static str,
}

/// Insight rules. The psychometric and technical trios are exhaustive
/// bands (exactly one of each fires); the interest and skill rules are
/// independent extras.
pub const INSIGHT_RULES: &[Rule] = &[
    Rule {
        applies: |s| s.psychometric >= 80,
        message: "You demonstrate excellent psychological fit for AR/VR development with strong creativity and persistence.",
    },
    Rule {
        applies: |s| s.psychometric >= 60 && s.psychometric < 80,
        message: "You show good potential for AR/VR development but may benefit from building confidence in creative problem-solving.",
    },
    Rule {
        applies: |s| s.psychometric < 60,
        message: "Consider developing your creative thinking and persistence skills before pursuing AR/VR development.",
    },
    Rule {
        applies: |s| s.technical >= 80,
        message: "Your technical knowledge is strong and you're ready for intermediate AR/VR development challenges.",
    },
    Rule {
        applies: |s| s.technical >= 60 && s.technical < 80,
        message: "You have solid foundational knowledge but should strengthen your programming and 3D math skills.",
    },
    Rule {
        applies: |s| s.technical < 60,
        message: "Focus on building fundamental programming skills before diving into AR/VR specific technologies.",
    },
    Rule {
        applies: |s| s.interest >= 80,
        message: "Your genuine interest in AR/VR technology will drive your learning and career success.",
    },
    Rule {
        applies: |s| s.skill < 60,
        message: "Building more hands-on programming experience will significantly improve your readiness.",
    },
];

/// Next-step rules: three canned actions per recommendation tier, plus
/// two conditional extras for weak pillars.
pub const NEXT_STEP_RULES: &[Rule] = &[
    Rule {
        applies: |s| s.recommendation == Recommendation::Yes,
        message: "Start with Unity Learn basics and build your first AR/VR project",
    },
    Rule {
        applies: |s| s.recommendation == Recommendation::Yes,
        message: "Join AR/VR developer communities and participate in hackathons",
    },
    Rule {
        applies: |s| s.recommendation == Recommendation::Yes,
        message: "Focus on building a portfolio with 2-3 completed projects",
    },
    Rule {
        applies: |s| s.recommendation == Recommendation::Maybe,
        message: "Strengthen programming fundamentals with C# or C++ courses",
    },
    Rule {
        applies: |s| s.recommendation == Recommendation::Maybe,
        message: "Complete online tutorials for Unity or Unreal Engine",
    },
    Rule {
        applies: |s| s.recommendation == Recommendation::Maybe,
        message: "Build confidence with simpler 3D projects before tackling AR/VR",
    },
    Rule {
        applies: |s| s.recommendation == Recommendation::No,
        message: "Start with general programming courses (Python, JavaScript, or C#)",
    },
    Rule {
        applies: |s| s.recommendation == Recommendation::No,
        message: "Explore related fields like front-end development or game design",
    },
    Rule {
        applies: |s| s.recommendation == Recommendation::No,
        message: "Consider roles in QA testing for AR/VR applications",
    },
    Rule {
        applies: |s| s.technical < 70,
        message: "Focus on mathematics for programmers and 3D math concepts",
    },
    Rule {
        applies: |s| s.psychometric < 70,
        message: "Practice creative problem-solving through coding challenges",
    },
];

fn evaluate(rules: &[Rule], snapshot: &ScoreSnapshot) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(snapshot))
        .map(|rule| rule.message.to_string())
        .collect()
}

/// All matching insight messages, in table order
pub fn insights(snapshot: &ScoreSnapshot) -> Vec<String> {
    evaluate(INSIGHT_RULES, snapshot)
}

/// All matching next-step messages, in table order
pub fn next_steps(snapshot: &ScoreSnapshot) -> Vec<String> {
    evaluate(NEXT_STEP_RULES, snapshot)
}
