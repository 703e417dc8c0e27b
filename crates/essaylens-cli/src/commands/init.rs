//! The `essaylens init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create essaylens.toml
    if std::path::Path::new("essaylens.toml").exists() {
        println!("essaylens.toml already exists, skipping.");
    } else {
        std::fs::write("essaylens.toml", SAMPLE_CONFIG)?;
        println!("Created essaylens.toml");
    }

    // Create example batch manifest and essay
    std::fs::create_dir_all("essays")?;
    let essay_path = std::path::Path::new("essays/example.txt");
    if essay_path.exists() {
        println!("essays/example.txt already exists, skipping.");
    } else {
        std::fs::write(essay_path, EXAMPLE_ESSAY)?;
        println!("Created essays/example.txt");
    }

    let manifest_path = std::path::Path::new("essays/batch.toml");
    if manifest_path.exists() {
        println!("essays/batch.toml already exists, skipping.");
    } else {
        std::fs::write(manifest_path, EXAMPLE_MANIFEST)?;
        println!("Created essays/batch.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: essaylens analyze essays/example.txt --goal leadership");
    println!("  2. Run: essaylens validate --manifest essays/batch.toml");
    println!("  3. Run: essaylens batch --manifest essays/batch.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# essaylens configuration

# Where analyzed essays and the analytics counter are stored.
data_dir = "./essaylens-data"

# Goal used when a command or manifest does not set one.
default_goal = "general"

# Max concurrent essays in batch runs.
parallelism = 4

# Where generated reports land.
output_dir = "./essaylens-reports"
"#;

const EXAMPLE_ESSAY: &str = "When our robotics season collapsed two weeks before the regional, \
I organized a rebuild schedule and led nightly sessions in the shop. The moment our drivetrain \
finally crackled to life, I realized how much I had learned about asking for help.\n";

const EXAMPLE_MANIFEST: &str = r#"[batch]
id = "example"
name = "Example Batch"
description = "A starter batch to try essaylens with"
default_goal = "leadership"

[[essays]]
id = "robotics"
title = "Robotics Rebuild"
goal = "leadership"
path = "example.txt"

[[essays]]
id = "inline-draft"
title = "Inline Draft"
goal = "resilience"
content = """
The challenge seemed impossible until I broke it into small steps and
overcame each one. That season changed how I face hard problems.
"""
"#;
