//! The `essaylens compare` command.

use std::path::PathBuf;

use anyhow::Result;

use essaylens_core::report::BatchReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: i32,
    fail_on_regression: bool,
    format: String,
) -> Result<()> {
    let baseline = BatchReport::load_json(&baseline_path)?;
    let current = BatchReport::load_json(&current_path)?;

    let comparison = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", comparison.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        _ => {
            // text format
            println!(
                "Comparison: {} improved, {} regressed, {} unchanged",
                comparison.improved.len(),
                comparison.regressed.len(),
                comparison.unchanged
            );

            if !comparison.improved.is_empty() {
                println!("\nImproved:");
                for e in &comparison.improved {
                    println!(
                        "  {} {} -> {} (+{})",
                        e.essay_id, e.baseline_score, e.current_score, e.delta
                    );
                }
            }

            if !comparison.regressed.is_empty() {
                println!("\nRegressed:");
                for e in &comparison.regressed {
                    println!(
                        "  {} {} -> {} ({})",
                        e.essay_id, e.baseline_score, e.current_score, e.delta
                    );
                }
            }

            if comparison.new_essays > 0 {
                println!("\n{} new essay(s)", comparison.new_essays);
            }
            if comparison.removed_essays > 0 {
                println!("{} removed essay(s)", comparison.removed_essays);
            }
        }
    }

    if fail_on_regression && comparison.has_regressions() {
        std::process::exit(1);
    }

    Ok(())
}
