//! The `essaylens stats` command.
//!
//! Shows the analytics counter plus aggregates derived from stored
//! records. With an empty store it falls back to the display literals the
//! original landing page shipped with, clearly marked as samples.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use essaylens_core::statistics::compute_aggregate_stats;
use essaylens_store::{
    EssayStore, JsonStore, FALLBACK_ESSAYS_ANALYZED, FALLBACK_IMPROVEMENT_PERCENT,
    FALLBACK_STUDENTS_HELPED,
};

use crate::config::load_config_from;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = JsonStore::open(&config.data_dir)?;

    let essays = store.all_essays().await?;
    let analytics = store.analytics().await?;

    if essays.is_empty() && analytics.is_none() {
        println!("No analyses recorded yet — showing sample figures.\n");
        let mut table = Table::new();
        table.set_header(vec!["Essays analyzed", "Students helped", "Avg improvement"]);
        table.add_row(vec![
            Cell::new(FALLBACK_ESSAYS_ANALYZED),
            Cell::new(FALLBACK_STUDENTS_HELPED),
            Cell::new(format!("{FALLBACK_IMPROVEMENT_PERCENT}%")),
        ]);
        println!("{table}");
        return Ok(());
    }

    let stats = compute_aggregate_stats(&essays);
    let total_analyzed = analytics
        .map(|a| a.total_essays_analyzed)
        .unwrap_or(stats.total_essays as u64);

    let mut table = Table::new();
    table.set_header(vec!["Essays analyzed", "Students helped", "Avg improvement"]);
    table.add_row(vec![
        Cell::new(total_analyzed),
        Cell::new(stats.distinct_students),
        Cell::new(
            stats
                .avg_improvement_percent
                .map(|p| format!("{p:+.1}%"))
                .unwrap_or_else(|| "n/a".to_string()),
        ),
    ]);
    println!("{table}");

    let mut scores = Table::new();
    scores.set_header(vec!["Avg Overall", "Avg Clarity", "Avg Authenticity", "Avg Impact"]);
    scores.add_row(vec![
        Cell::new(format!("{:.1}", stats.avg_overall)),
        Cell::new(format!("{:.1}", stats.avg_clarity)),
        Cell::new(format!("{:.1}", stats.avg_authenticity)),
        Cell::new(format!("{:.1}", stats.avg_impact)),
    ]);
    println!("\n{scores}");

    if !stats.per_goal.is_empty() {
        let mut goals = Table::new();
        goals.set_header(vec!["Goal", "Essays", "Avg Overall"]);
        let mut per_goal: Vec<_> = stats.per_goal.values().collect();
        per_goal.sort_by(|a, b| b.count.cmp(&a.count).then(a.goal.cmp(&b.goal)));
        for goal_stats in per_goal {
            goals.add_row(vec![
                Cell::new(&goal_stats.goal),
                Cell::new(goal_stats.count),
                Cell::new(format!("{:.1}", goal_stats.avg_overall)),
            ]);
        }
        println!("\n{goals}");
    }

    let d = &stats.score_distribution;
    println!(
        "\nDistribution: {} needs work / {} developing / {} strong / {} exceptional",
        d.needs_work, d.developing, d.strong, d.exceptional
    );

    Ok(())
}
