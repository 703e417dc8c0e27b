//! The `essaylens history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use essaylens_store::{EssayStore, JsonStore};

use crate::config::load_config_from;

pub async fn execute(user: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = JsonStore::open(&config.data_dir)?;

    let essays = match &user {
        Some(user_id) => store.essays_for_user(user_id).await?,
        None => store.all_essays().await?,
    };

    if essays.is_empty() {
        match user {
            Some(user_id) => println!("No essays stored for '{user_id}'."),
            None => println!("No essays stored yet. Run `essaylens analyze` first."),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Analyzed",
        "Title",
        "Student",
        "Goal",
        "Words",
        "Overall",
    ]);

    for essay in &essays {
        table.add_row(vec![
            Cell::new(essay.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(essay.title.as_deref().unwrap_or("—")),
            Cell::new(essay.user_id.as_deref().unwrap_or("anonymous")),
            Cell::new(essay.goal.to_string()),
            Cell::new(essay.analysis.word_count),
            Cell::new(essay.analysis.overall_score),
        ]);
    }

    println!("{table}");
    println!("\n{} essay(s)", essays.len());

    Ok(())
}
