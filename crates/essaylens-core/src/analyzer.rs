//! The essay scoring engine.
//!
//! A pure function family over plain text: four independent scalar
//! heuristics (counts, clarity, authenticity, impact), an averaged overall
//! score, and a fixed-order suggestion rule list. Every input is total —
//! there is no error path, no I/O, and no shared state, so the engine may
//! be called concurrently without coordination.

use std::sync::OnceLock;

use regex::Regex;

use crate::lexicon::*;
use crate::model::{AnalysisResult, Goal};

/// Runs of sentence-ending punctuation.
fn sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence regex"))
}

/// Whole-word, case-insensitive alternation over the formal word list.
fn formal_word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b(?:{})\b", FORMAL_WORDS.join("|")))
            .expect("valid formal-word regex")
    })
}

/// Whole-word, case-insensitive alternation over first-person pronouns.
fn pronoun_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b(?:{})\b", FIRST_PERSON_PRONOUNS.join("|")))
            .expect("valid pronoun regex")
    })
}

/// Score an essay against a goal.
///
/// Deterministic and total: empty or whitespace-only text yields zero
/// counts and baseline scores, never an error.
pub fn analyze(content: &str, goal: &Goal) -> AnalysisResult {
    let word_count = word_count(content);
    let sentence_count = sentences(content).count() as u32;

    let clarity_score = clarity_score(content);
    let authenticity_score = authenticity_score(content);
    let impact_score = impact_score(content);
    let overall_score = overall_score(clarity_score, authenticity_score, impact_score);

    let suggestions = suggestions(
        content,
        goal,
        clarity_score,
        authenticity_score,
        impact_score,
    );

    AnalysisResult {
        word_count,
        sentence_count,
        clarity_score,
        authenticity_score,
        impact_score,
        overall_score,
        suggestions,
    }
}

/// Whitespace-delimited non-empty tokens.
pub fn word_count(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// Non-empty trimmed segments after splitting on runs of `.`, `!`, `?`.
fn sentences(text: &str) -> impl Iterator<Item = &str> {
    sentence_boundary()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Clarity: a crude readability proxy. Start from a perfect score and
/// dock points per long sentence, floored. Never exceeds the base since
/// the rule only subtracts.
pub fn clarity_score(text: &str) -> i32 {
    let long_sentences = sentences(text)
        .filter(|s| s.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count() as i32;
    (CLARITY_BASE - long_sentences * LONG_SENTENCE_PENALTY).max(CLARITY_FLOOR)
}

/// Authenticity: penalize stilted formal diction and a missing
/// first-person voice, then clamp.
pub fn authenticity_score(text: &str) -> i32 {
    let mut score = AUTHENTICITY_BASE;

    let formal_count = formal_word_pattern().find_iter(text).count() as u32;
    if formal_count > FORMAL_COUNT_THRESHOLD {
        score -= FORMALITY_PENALTY;
    }

    let pronoun_count = pronoun_pattern().find_iter(text).count() as u32;
    if pronoun_count < PRONOUN_COUNT_THRESHOLD {
        score -= MISSING_VOICE_PENALTY;
    }

    score.clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// Impact: reward vivid language with a flat bonus and penalize a missing
/// narrative arc, then clamp.
///
/// Both checks are deliberately substring presence rather than whole-word
/// occurrence counts ("gentle" inside "gentleman" counts), matching the
/// shipped behavior of the heuristic.
pub fn impact_score(text: &str) -> i32 {
    let mut score = IMPACT_BASE;
    let lowered = text.to_lowercase();

    let vivid_present = VIVID_WORDS.iter().any(|w| lowered.contains(w));
    if vivid_present {
        score += VIVID_BONUS;
    }

    let narrative_count = NARRATIVE_WORDS
        .iter()
        .filter(|w| lowered.contains(*w))
        .count();
    if narrative_count < NARRATIVE_COUNT_THRESHOLD {
        score -= MISSING_NARRATIVE_PENALTY;
    }

    score.clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// Round-half-up mean of the three sub-scores.
fn overall_score(clarity: i32, authenticity: i32, impact: i32) -> i32 {
    let mean = f64::from(clarity + authenticity + impact) / 3.0;
    mean.round() as i32
}

/// Evaluate the suggestion rules in fixed order. Each rule fires at most
/// once, so the output has at most four entries and no duplicates.
fn suggestions(
    text: &str,
    goal: &Goal,
    clarity: i32,
    authenticity: i32,
    impact: i32,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if clarity < SUGGESTION_THRESHOLD {
        suggestions.push(READABILITY_SUGGESTION.to_string());
    }
    if authenticity < SUGGESTION_THRESHOLD {
        suggestions.push(VOICE_SUGGESTION.to_string());
    }
    if impact < SUGGESTION_THRESHOLD {
        suggestions.push(VIVIDNESS_SUGGESTION.to_string());
    }

    if let Some((first, second)) = goal.cue_words() {
        let lowered = text.to_lowercase();
        if !lowered.contains(first) && !lowered.contains(second) {
            let text = match goal {
                Goal::Leadership => LEADERSHIP_SUGGESTION,
                Goal::Resilience => RESILIENCE_SUGGESTION,
                Goal::Curiosity => CURIOSITY_SUGGESTION,
                Goal::Other(_) => unreachable!("Other has no cue words"),
            };
            suggestions.push(text.to_string());
        }
    }

    suggestions
}
