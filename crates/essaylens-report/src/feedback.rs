//! Per-essay markdown feedback sheet.
//!
//! The markdown is what a counselor would hand back to the student: the
//! scores, what they mean, and the concrete suggestions.

use anyhow::Result;
use std::path::Path;

use essaylens_core::model::EssayRecord;

/// Human label for a score band.
fn band(score: i32) -> &'static str {
    match score {
        90..=100 => "exceptional",
        70..=89 => "strong",
        50..=69 => "developing",
        _ => "needs work",
    }
}

/// Render one essay's analysis as a markdown feedback sheet.
pub fn feedback_markdown(record: &EssayRecord) -> String {
    let analysis = &record.analysis;
    let mut md = String::new();

    let title = record.title.as_deref().unwrap_or("Untitled essay");
    md.push_str(&format!("# Feedback: {title}\n\n"));
    md.push_str(&format!(
        "Goal: **{}** | {} words, {} sentences | analyzed {}\n\n",
        record.goal,
        analysis.word_count,
        analysis.sentence_count,
        record.created_at.format("%Y-%m-%d")
    ));

    md.push_str("| Score | Value | Band |\n");
    md.push_str("|-------|-------|------|\n");
    for (label, score) in [
        ("Clarity", analysis.clarity_score),
        ("Authenticity", analysis.authenticity_score),
        ("Impact", analysis.impact_score),
        ("Overall", analysis.overall_score),
    ] {
        md.push_str(&format!("| {label} | {score} | {} |\n", band(score)));
    }
    md.push('\n');

    if analysis.suggestions.is_empty() {
        md.push_str("No suggestions — this draft clears every heuristic.\n");
    } else {
        md.push_str("## Suggestions\n\n");
        for suggestion in &analysis.suggestions {
            md.push_str(&format!("- {suggestion}\n"));
        }
    }

    md
}

/// Write a feedback sheet to a file.
pub fn write_feedback(record: &EssayRecord, path: &Path) -> Result<()> {
    let md = feedback_markdown(record);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use essaylens_core::analyzer::analyze;
    use essaylens_core::model::Goal;

    fn make_record(content: &str, goal: Goal, title: Option<&str>) -> EssayRecord {
        let analysis = analyze(content, &goal);
        EssayRecord::new(content, goal, analysis, None, title.map(String::from))
    }

    #[test]
    fn feedback_lists_scores_and_suggestions() {
        let record = make_record("I went to the store.", Goal::Leadership, Some("Store Run"));
        let md = feedback_markdown(&record);

        assert!(md.contains("# Feedback: Store Run"));
        assert!(md.contains("| Overall | 70 | strong |"));
        assert!(md.contains("## Suggestions"));
        assert!(md.contains("leadership essays"));
    }

    #[test]
    fn clean_draft_gets_no_suggestions_line() {
        // Pronoun-rich, vivid, narrative, with a cue word: nothing fires.
        let content = "I led the club when the moment crackled and I realized what I had \
                       learned about myself and my team and me.";
        let record = make_record(content, Goal::Leadership, None);
        assert!(record.analysis.suggestions.is_empty());

        let md = feedback_markdown(&record);
        assert!(md.contains("Untitled essay"));
        assert!(md.contains("No suggestions"));
    }

    #[test]
    fn write_creates_parent_dirs() {
        let record = make_record("Plain.", Goal::Curiosity, None);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/feedback.md");
        write_feedback(&record, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn band_labels() {
        assert_eq!(band(95), "exceptional");
        assert_eq!(band(70), "strong");
        assert_eq!(band(69), "developing");
        assert_eq!(band(40), "needs work");
    }
}
