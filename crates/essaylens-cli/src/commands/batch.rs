//! The `essaylens batch` command.
//!
//! Scores every essay in a manifest (or a directory of manifests) with
//! bounded parallelism, persists the records, and writes a batch report.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use comfy_table::{Cell, Table};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;
use uuid::Uuid;

use essaylens_core::analyzer::analyze;
use essaylens_core::manifest::{self, Batch};
use essaylens_core::model::EssayRecord;
use essaylens_core::report::{BatchReport, BatchSummary, ScoredEssay};
use essaylens_core::statistics::compute_aggregate_stats;
use essaylens_report::html::write_html_report;
use essaylens_store::{EssayStore, JsonStore};

use crate::config::load_config_from;

pub async fn execute(
    manifest_path: PathBuf,
    parallelism: usize,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(parallelism >= 1, "parallelism must be at least 1");

    let config = load_config_from(config_path.as_deref())?;
    let output_dir = output.unwrap_or(config.output_dir);

    let batches = if manifest_path.is_dir() {
        manifest::load_manifest_directory(&manifest_path)?
    } else {
        vec![manifest::parse_manifest(&manifest_path)?]
    };
    anyhow::ensure!(!batches.is_empty(), "no manifests found");

    let store = Arc::new(JsonStore::open(&config.data_dir)?);

    for batch in &batches {
        eprintln!(
            "essaylens — scoring {} essays from batch '{}'",
            batch.essays.len(),
            batch.name
        );

        let report = run_batch(batch, parallelism, Arc::clone(&store)).await?;
        print_summary(&report);

        std::fs::create_dir_all(&output_dir)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        let formats: Vec<&str> = if format == "all" {
            vec!["json", "html"]
        } else {
            format.split(',').map(|s| s.trim()).collect()
        };

        for fmt in &formats {
            match *fmt {
                "json" => {
                    let path = output_dir.join(format!("batch-{}-{timestamp}.json", batch.id));
                    report.save_json(&path)?;
                    eprintln!("Report saved to: {}", path.display());
                }
                "html" => {
                    let path = output_dir.join(format!("batch-{}-{timestamp}.html", batch.id));
                    write_html_report(&report, &path)?;
                    eprintln!("HTML report: {}", path.display());
                }
                _ => eprintln!("Unknown format: {fmt}"),
            }
        }
    }

    Ok(())
}

/// Score a batch with bounded parallelism and persist every record.
async fn run_batch(
    batch: &Batch,
    parallelism: usize,
    store: Arc<JsonStore>,
) -> Result<BatchReport> {
    let start = Instant::now();
    let semaphore = Arc::new(Semaphore::new(parallelism));

    let mut futures = FuturesUnordered::new();
    for essay in &batch.essays {
        let essay = essay.clone();
        let goal = essay.goal_or(&batch.default_goal).clone();
        let semaphore = Arc::clone(&semaphore);
        let store = Arc::clone(&store);

        futures.push(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|_| anyhow::anyhow!("semaphore closed"))?;

            let analysis = analyze(&essay.content, &goal);
            let record = EssayRecord::new(
                essay.content.clone(),
                goal,
                analysis,
                essay.user_id.clone(),
                essay.title.clone(),
            );
            store.save_essay(&record).await?;
            store.record_analysis().await?;

            Ok::<_, anyhow::Error>(ScoredEssay {
                essay_id: essay.id,
                record,
            })
        });
    }

    let mut results = Vec::new();
    while let Some(result) = futures.next().await {
        match result {
            Ok(scored) => results.push(scored),
            Err(e) => tracing::error!("essay failed: {e:#}"),
        }
    }

    // Manifest order, not completion order.
    let order: Vec<&str> = batch.essays.iter().map(|e| e.id.as_str()).collect();
    results.sort_by_key(|r| order.iter().position(|id| *id == r.essay_id));

    let records: Vec<EssayRecord> = results.iter().map(|r| r.record.clone()).collect();
    let aggregate = compute_aggregate_stats(&records);

    Ok(BatchReport {
        id: Uuid::new_v4(),
        created_at: chrono::Utc::now(),
        batch: BatchSummary {
            id: batch.id.clone(),
            name: batch.name.clone(),
            essay_count: batch.essays.len(),
        },
        results,
        aggregate,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn print_summary(report: &BatchReport) {
    let mut table = Table::new();
    table.set_header(vec![
        "Essay",
        "Goal",
        "Words",
        "Clarity",
        "Authenticity",
        "Impact",
        "Overall",
        "Suggestions",
    ]);

    for scored in &report.results {
        let a = &scored.record.analysis;
        table.add_row(vec![
            Cell::new(&scored.essay_id),
            Cell::new(scored.record.goal.to_string()),
            Cell::new(a.word_count),
            Cell::new(a.clarity_score),
            Cell::new(a.authenticity_score),
            Cell::new(a.impact_score),
            Cell::new(a.overall_score),
            Cell::new(a.suggestions.len()),
        ]);
    }

    println!("{table}");
    eprintln!(
        "\nScored {} essays in {}ms (avg overall {:.1})",
        report.aggregate.total_essays, report.duration_ms, report.aggregate.avg_overall
    );
}
