//! The `essaylens analyze` command.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use essaylens_core::analyzer::analyze;
use essaylens_core::model::{EssayRecord, Goal};
use essaylens_report::feedback::write_feedback;
use essaylens_store::{EssayStore, JsonStore};

use crate::config::load_config_from;

pub async fn execute(
    essay_path: PathBuf,
    goal: String,
    title: Option<String>,
    user: Option<String>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let content = if essay_path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read essay from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&essay_path)
            .with_context(|| format!("failed to read essay: {}", essay_path.display()))?
    };

    let goal = Goal::from(goal);
    let analysis = analyze(&content, &goal);
    let record = EssayRecord::new(content, goal, analysis, user, title);

    // Persist first, then render; a failed render must not lose the record.
    let store = JsonStore::open(&config.data_dir)?;
    store.save_essay(&record).await?;
    let analytics = store.record_analysis().await?;
    tracing::info!(
        essay_id = %record.id,
        total = analytics.total_essays_analyzed,
        "analysis recorded"
    );

    let output_dir = output.unwrap_or(config.output_dir);
    let formats: Vec<&str> = if format == "all" {
        vec!["text", "json", "html", "markdown"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "text" => print_summary(&record),
            "json" => {
                let path = output_dir.join(format!("analysis-{}.json", record.id));
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, serde_json::to_string_pretty(&record)?)?;
                eprintln!("JSON saved to: {}", path.display());
            }
            "markdown" => {
                let path = output_dir.join(format!("feedback-{}.md", record.id));
                write_feedback(&record, &path)?;
                eprintln!("Feedback sheet: {}", path.display());
            }
            "html" => {
                // One-essay batch report reuses the batch renderer.
                let report = single_essay_report(&record);
                let path = output_dir.join(format!("analysis-{}.html", record.id));
                essaylens_report::html::write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => eprintln!("Unknown format: {fmt}"),
        }
    }

    Ok(())
}

fn single_essay_report(record: &EssayRecord) -> essaylens_core::report::BatchReport {
    use essaylens_core::report::{BatchReport, BatchSummary, ScoredEssay};
    use essaylens_core::statistics::compute_aggregate_stats;

    BatchReport {
        id: record.id,
        created_at: record.created_at,
        batch: BatchSummary {
            id: record.id.to_string(),
            name: record
                .title
                .clone()
                .unwrap_or_else(|| "Single essay".to_string()),
            essay_count: 1,
        },
        aggregate: compute_aggregate_stats(std::slice::from_ref(record)),
        results: vec![ScoredEssay {
            essay_id: record.id.to_string(),
            record: record.clone(),
        }],
        duration_ms: 0,
    }
}

fn print_summary(record: &EssayRecord) {
    let analysis = &record.analysis;

    let mut table = Table::new();
    table.set_header(vec![
        "Goal",
        "Words",
        "Sentences",
        "Clarity",
        "Authenticity",
        "Impact",
        "Overall",
    ]);
    table.add_row(vec![
        record.goal.to_string(),
        analysis.word_count.to_string(),
        analysis.sentence_count.to_string(),
        analysis.clarity_score.to_string(),
        analysis.authenticity_score.to_string(),
        analysis.impact_score.to_string(),
        analysis.overall_score.to_string(),
    ]);
    println!("{table}");

    if analysis.suggestions.is_empty() {
        println!("\nNo suggestions.");
    } else {
        println!("\nSuggestions:");
        for suggestion in &analysis.suggestions {
            println!("  - {suggestion}");
        }
    }
}
