//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn essaylens() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("essaylens").unwrap()
}

const MANIFEST: &str = r#"[batch]
id = "drafts"
name = "Draft Batch"
default_goal = "leadership"

[[essays]]
id = "draft-1"
title = "First Draft"
content = "I went to the store."

[[essays]]
id = "draft-2"
goal = "resilience"
content = "The challenge seemed impossible until I overcame it and realized the moment had changed me."
"#;

#[test]
fn help_output() {
    essaylens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Essay scoring and feedback tool"));
}

#[test]
fn version_output() {
    essaylens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("essaylens"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    essaylens()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created essaylens.toml"))
        .stdout(predicate::str::contains("Created essays/batch.toml"));

    assert!(dir.path().join("essaylens.toml").exists());
    assert!(dir.path().join("essays/example.txt").exists());
    assert!(dir.path().join("essays/batch.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    essaylens().current_dir(dir.path()).arg("init").assert().success();

    essaylens()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_valid_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("batch.toml");
    std::fs::write(&manifest, MANIFEST).unwrap();

    essaylens()
        .arg("validate")
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 essays"))
        .stdout(predicate::str::contains("All manifests valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("batch.toml");
    std::fs::write(
        &manifest,
        "[batch]\nid = \"empty\"\nname = \"Empty\"\n\n[[essays]]\nid = \"blank\"\n",
    )
    .unwrap();

    essaylens()
        .arg("validate")
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("no content"));
}

#[test]
fn validate_nonexistent_file() {
    essaylens()
        .arg("validate")
        .arg("--manifest")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn analyze_essay_file() {
    let dir = TempDir::new().unwrap();
    let essay = dir.path().join("essay.txt");
    std::fs::write(&essay, "I went to the store.").unwrap();

    essaylens()
        .current_dir(dir.path())
        .env("ESSAYLENS_DATA_DIR", dir.path().join("data"))
        .arg("analyze")
        .arg(&essay)
        .arg("--goal")
        .arg("leadership")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggestions:"))
        .stdout(predicate::str::contains("leadership essays"));

    // The analysis was persisted
    assert!(dir.path().join("data/essays.jsonl").exists());
    assert!(dir.path().join("data/analytics.json").exists());
}

#[test]
fn analyze_from_stdin() {
    let dir = TempDir::new().unwrap();

    essaylens()
        .current_dir(dir.path())
        .env("ESSAYLENS_DATA_DIR", dir.path().join("data"))
        .arg("analyze")
        .arg("-")
        .arg("--goal")
        .arg("curiosity")
        .write_stdin("I wondered why the question mattered.")
        .assert()
        .success()
        .stdout(predicate::str::contains("curiosity"));
}

#[test]
fn analyze_nonexistent_essay_fails() {
    let dir = TempDir::new().unwrap();

    essaylens()
        .current_dir(dir.path())
        .env("ESSAYLENS_DATA_DIR", dir.path().join("data"))
        .arg("analyze")
        .arg("no-such-essay.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read essay"));
}

#[test]
fn analyze_writes_markdown_feedback() {
    let dir = TempDir::new().unwrap();
    let essay = dir.path().join("essay.txt");
    std::fs::write(&essay, "Plain text.").unwrap();

    essaylens()
        .current_dir(dir.path())
        .env("ESSAYLENS_DATA_DIR", dir.path().join("data"))
        .arg("analyze")
        .arg(&essay)
        .arg("--format")
        .arg("markdown")
        .arg("--output")
        .arg(dir.path().join("reports"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Feedback sheet"));

    let reports: Vec<_> = std::fs::read_dir(dir.path().join("reports"))
        .unwrap()
        .collect();
    assert_eq!(reports.len(), 1);
}

#[test]
fn stats_empty_store_shows_sample_figures() {
    let dir = TempDir::new().unwrap();

    essaylens()
        .current_dir(dir.path())
        .env("ESSAYLENS_DATA_DIR", dir.path().join("data"))
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("sample figures"))
        .stdout(predicate::str::contains("1247"))
        .stdout(predicate::str::contains("892"));
}

#[test]
fn history_empty_store() {
    let dir = TempDir::new().unwrap();

    essaylens()
        .current_dir(dir.path())
        .env("ESSAYLENS_DATA_DIR", dir.path().join("data"))
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No essays stored yet"));
}

#[test]
fn compare_nonexistent_report() {
    essaylens()
        .arg("compare")
        .arg("--baseline")
        .arg("no_such_file.json")
        .arg("--current")
        .arg("also_no_file.json")
        .assert()
        .failure();
}
