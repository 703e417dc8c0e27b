//! Word lists and tuning constants for the scoring heuristics.
//!
//! Every threshold and penalty used by the analyzer lives here as a named
//! constant so the heuristic can be read, tuned, and tested in one place
//! instead of being scattered through the scoring code as bare literals.

/// Words that read as overly formal in a personal essay. Counted as
/// whole-word, case-insensitive occurrences.
pub const FORMAL_WORDS: &[&str] = &[
    "furthermore",
    "subsequently",
    "henceforth",
    "wherein",
    "heretofore",
];

/// First-person pronouns. A personal essay with few of these tends to
/// read like a report rather than a story.
pub const FIRST_PERSON_PRONOUNS: &[&str] = &["i", "me", "my", "myself"];

/// Sensory words that signal vivid language. Matched as case-insensitive
/// substrings anywhere in the text, not whole words.
pub const VIVID_WORDS: &[&str] = &[
    "crackled",
    "whispered",
    "blazing",
    "shimmering",
    "thundered",
    "gentle",
    "sharp",
];

/// Words that signal narrative arc (a moment of change or realization).
/// Same substring test as [`VIVID_WORDS`].
pub const NARRATIVE_WORDS: &[&str] = &["moment", "realized", "discovered", "changed", "learned"];

/// Clarity starts from a perfect score and only loses points.
pub const CLARITY_BASE: i32 = 100;
/// Clarity never drops below this floor, however many run-on sentences.
pub const CLARITY_FLOOR: i32 = 40;
/// A sentence with more whitespace-delimited words than this is "long".
pub const LONG_SENTENCE_WORDS: usize = 25;
/// Points lost per long sentence.
pub const LONG_SENTENCE_PENALTY: i32 = 10;

/// Authenticity baseline for any text.
pub const AUTHENTICITY_BASE: i32 = 70;
/// More formal-word occurrences than this triggers the formality penalty.
pub const FORMAL_COUNT_THRESHOLD: u32 = 2;
/// Penalty for stilted, overly formal diction.
pub const FORMALITY_PENALTY: i32 = 15;
/// Fewer first-person pronouns than this triggers the voice penalty.
pub const PRONOUN_COUNT_THRESHOLD: u32 = 5;
/// Penalty for an essay with little first-person voice.
pub const MISSING_VOICE_PENALTY: i32 = 10;

/// Impact baseline for any text.
pub const IMPACT_BASE: i32 = 60;
/// Flat bonus when at least one vivid word appears, regardless of count.
pub const VIVID_BONUS: i32 = 10;
/// Fewer distinct narrative words than this triggers the story penalty.
pub const NARRATIVE_COUNT_THRESHOLD: usize = 2;
/// Penalty for an essay with no discernible narrative arc.
pub const MISSING_NARRATIVE_PENALTY: i32 = 10;

/// Floor shared by authenticity, impact, and therefore the overall score.
pub const SCORE_FLOOR: i32 = 30;
/// Ceiling shared by every score.
pub const SCORE_CEILING: i32 = 100;

/// Sub-scores below this threshold earn the matching suggestion.
pub const SUGGESTION_THRESHOLD: i32 = 70;

/// Suggestion emitted when clarity falls below the threshold.
pub const READABILITY_SUGGESTION: &str =
    "Consider breaking down some of your longer sentences for better readability.";

/// Suggestion emitted when authenticity falls below the threshold.
pub const VOICE_SUGGESTION: &str =
    "Try using more conversational, personal language to make your essay more authentic.";

/// Suggestion emitted when impact falls below the threshold.
pub const VIVIDNESS_SUGGESTION: &str =
    "Add more vivid, sensory details to make your essay more engaging and memorable.";

/// Goal-specific suggestion for leadership essays missing both cue words.
pub const LEADERSHIP_SUGGESTION: &str = "For leadership essays, include specific examples of when you took initiative or organized others.";

/// Goal-specific suggestion for resilience essays missing both cue words.
pub const RESILIENCE_SUGGESTION: &str = "Show resilience by describing specific challenges you've overcome and how you grew from them.";

/// Goal-specific suggestion for curiosity essays missing both cue words.
pub const CURIOSITY_SUGGESTION: &str = "Demonstrate curiosity by sharing questions you've asked or topics you've explored deeply.";
