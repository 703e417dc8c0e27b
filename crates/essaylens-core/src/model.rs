//! Core data model types for essaylens.
//!
//! These are the fundamental types the entire essaylens system uses to
//! represent essays, writing goals, and analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The writing goal an essay is scored against.
///
/// This is an open enumeration: the three known goals get goal-specific
/// suggestion rules, and any other label is accepted as-is but earns no
/// goal-specific suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    Leadership,
    Resilience,
    Curiosity,
    Other(String),
}

impl Goal {
    /// The pair of cue words whose joint absence (as case-insensitive
    /// substrings) triggers the goal-specific suggestion.
    pub fn cue_words(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Goal::Leadership => Some(("led", "organized")),
            Goal::Resilience => Some(("challenge", "overcome")),
            Goal::Curiosity => Some(("wonder", "question")),
            Goal::Other(_) => None,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Leadership => write!(f, "leadership"),
            Goal::Resilience => write!(f, "resilience"),
            Goal::Curiosity => write!(f, "curiosity"),
            Goal::Other(label) => write!(f, "{label}"),
        }
    }
}

impl FromStr for Goal {
    type Err = Infallible;

    /// Never fails: unrecognized labels become [`Goal::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "leadership" => Goal::Leadership,
            "resilience" => Goal::Resilience,
            "curiosity" => Goal::Curiosity,
            _ => Goal::Other(s.to_string()),
        })
    }
}

impl From<String> for Goal {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Goal::Other(s))
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.to_string()
    }
}

/// The result of scoring one essay. Immutable once computed.
///
/// Score ranges: clarity 40..=100, authenticity/impact/overall 30..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Whitespace-delimited non-empty tokens.
    pub word_count: u32,
    /// Non-empty segments after splitting on runs of `.`, `!`, `?`.
    pub sentence_count: u32,
    /// Readability proxy: penalizes long sentences.
    pub clarity_score: i32,
    /// Personal-voice proxy: penalizes formal diction and missing pronouns.
    pub authenticity_score: i32,
    /// Engagement proxy: rewards vivid language, penalizes missing narrative.
    pub impact_score: i32,
    /// Rounded mean of the three sub-scores.
    pub overall_score: i32,
    /// 0 to 4 suggestions, in rule-evaluation order.
    pub suggestions: Vec<String>,
}

/// A persisted essay analysis: the submitted text plus everything the
/// engine computed for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssayRecord {
    /// Unique identifier for this analysis.
    pub id: Uuid,
    /// Submitting student, if known. Anonymous submissions are allowed.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Optional essay title.
    #[serde(default)]
    pub title: Option<String>,
    /// The original essay text.
    pub content: String,
    /// The goal the essay was scored against.
    pub goal: Goal,
    /// Computed scores and suggestions.
    pub analysis: AnalysisResult,
    /// Whether the essay may appear in shared views.
    #[serde(default)]
    pub is_public: bool,
    /// When the analysis ran.
    pub created_at: DateTime<Utc>,
}

impl EssayRecord {
    /// Build a record around a freshly computed analysis.
    pub fn new(
        content: impl Into<String>,
        goal: Goal,
        analysis: AnalysisResult,
        user_id: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content: content.into(),
            goal,
            analysis,
            is_public: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_display_and_parse() {
        assert_eq!(Goal::Leadership.to_string(), "leadership");
        assert_eq!(Goal::Resilience.to_string(), "resilience");
        assert_eq!("leadership".parse::<Goal>().unwrap(), Goal::Leadership);
        assert_eq!("Curiosity".parse::<Goal>().unwrap(), Goal::Curiosity);
        // Labels normalize case, so "Leadership" gets the leadership rules.
        assert_eq!("LEADERSHIP".parse::<Goal>().unwrap(), Goal::Leadership);
        assert_eq!(
            "perseverance".parse::<Goal>().unwrap(),
            Goal::Other("perseverance".into())
        );
    }

    #[test]
    fn goal_cue_words() {
        assert_eq!(Goal::Leadership.cue_words(), Some(("led", "organized")));
        assert_eq!(Goal::Resilience.cue_words(), Some(("challenge", "overcome")));
        assert_eq!(Goal::Curiosity.cue_words(), Some(("wonder", "question")));
        assert_eq!(Goal::Other("service".into()).cue_words(), None);
    }

    #[test]
    fn goal_serde_as_string() {
        let json = serde_json::to_string(&Goal::Resilience).unwrap();
        assert_eq!(json, "\"resilience\"");
        let parsed: Goal = serde_json::from_str("\"growth\"").unwrap();
        assert_eq!(parsed, Goal::Other("growth".into()));
    }

    #[test]
    fn essay_record_serde_roundtrip() {
        let record = EssayRecord::new(
            "I led the robotics club.",
            Goal::Leadership,
            AnalysisResult {
                word_count: 5,
                sentence_count: 1,
                clarity_score: 100,
                authenticity_score: 60,
                impact_score: 50,
                overall_score: 70,
                suggestions: vec![],
            },
            Some("student-7".into()),
            Some("Robotics".into()),
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: EssayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.goal, Goal::Leadership);
        assert_eq!(back.analysis.overall_score, 70);
        assert!(!back.is_public);
    }
}
