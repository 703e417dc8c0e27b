//! The `essaylens validate` command.

use std::path::PathBuf;

use anyhow::Result;

use essaylens_core::manifest::{self, ValidationWarning};

pub fn execute(manifest_path: PathBuf) -> Result<()> {
    let batches = if manifest_path.is_dir() {
        manifest::load_manifest_directory(&manifest_path)?
    } else {
        vec![manifest::parse_manifest(&manifest_path)?]
    };

    let mut total = 0usize;
    for batch in &batches {
        let warnings = manifest::validate_batch(batch);
        let status = if warnings.is_empty() { "ok" } else { "!!" };
        println!(
            "[{status}] Batch: {} ({} essays)",
            batch.name,
            batch.essays.len()
        );
        for warning in &warnings {
            println!("     WARNING: {}", describe(warning));
        }
        total += warnings.len();
    }

    if total == 0 {
        println!("All manifests valid.");
    } else {
        println!("\n{total} warning(s) found.");
    }

    Ok(())
}

fn describe(warning: &ValidationWarning) -> String {
    match &warning.essay_id {
        Some(id) => format!("[{id}] {}", warning.message),
        None => warning.message.clone(),
    }
}
