//! TOML batch manifest parser.
//!
//! Loads essay batches from TOML files and directories, and validates them.
//! A manifest names a set of essays, each either inline (`content`) or on
//! disk (`path`, resolved relative to the manifest file).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Goal;

/// Intermediate TOML structure for parsing manifest files.
#[derive(Debug, Deserialize)]
struct TomlManifestFile {
    batch: TomlBatchHeader,
    #[serde(default)]
    essays: Vec<TomlEssay>,
}

#[derive(Debug, Deserialize)]
struct TomlBatchHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_goal_str")]
    default_goal: String,
}

fn default_goal_str() -> String {
    "general".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlEssay {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    goal: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

/// A batch of essays to score together.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Unique identifier for this batch.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this batch.
    pub description: String,
    /// Goal applied to essays that do not set their own.
    pub default_goal: Goal,
    /// The essays in this batch.
    pub essays: Vec<BatchEssay>,
}

/// Where an essay's text came from in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Inline `content` in the manifest.
    Inline,
    /// Read from the given `path`, relative to the manifest.
    File(String),
    /// Both `path` and `content` given; the inline content wins and
    /// validation warns about the conflict.
    Conflict(String),
    /// Neither given.
    Missing,
}

/// One essay entry within a batch.
#[derive(Debug, Clone)]
pub struct BatchEssay {
    /// Identifier, unique within the batch.
    pub id: String,
    /// Optional title.
    pub title: Option<String>,
    /// Goal override for this essay.
    pub goal: Option<Goal>,
    /// The essay text. Empty when the manifest pointed at an unreadable
    /// or missing file; validation reports that case.
    pub content: String,
    /// How `content` was supplied.
    pub source: ContentSource,
    /// Submitting student, if known.
    pub user_id: Option<String>,
}

impl BatchEssay {
    /// The goal this essay is scored against, falling back to the batch
    /// default.
    pub fn goal_or<'a>(&'a self, default: &'a Goal) -> &'a Goal {
        self.goal.as_ref().unwrap_or(default)
    }
}

/// Parse a single TOML manifest file into a [`Batch`].
pub fn parse_manifest(path: &Path) -> Result<Batch> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest file: {}", path.display()))?;

    parse_manifest_str(&content, path)
}

/// Parse a TOML string into a [`Batch`]. Relative essay paths resolve
/// against the parent of `source_path`.
pub fn parse_manifest_str(content: &str, source_path: &Path) -> Result<Batch> {
    let parsed: TomlManifestFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let base_dir = source_path.parent().unwrap_or_else(|| Path::new("."));

    let default_goal = Goal::from(parsed.batch.default_goal);

    let essays = parsed
        .essays
        .into_iter()
        .map(|e| {
            let (content, source) = match (e.content, e.path) {
                (Some(inline), Some(path)) => (inline, ContentSource::Conflict(path)),
                (Some(inline), None) => (inline, ContentSource::Inline),
                (None, Some(rel)) => {
                    let essay_path = base_dir.join(&rel);
                    let text = match std::fs::read_to_string(&essay_path) {
                        Ok(text) => text,
                        Err(err) => {
                            tracing::warn!(
                                "essay '{}': cannot read {}: {}",
                                e.id,
                                essay_path.display(),
                                err
                            );
                            String::new()
                        }
                    };
                    (text, ContentSource::File(rel))
                }
                (None, None) => (String::new(), ContentSource::Missing),
            };

            let goal = e.goal.map(Goal::from);

            BatchEssay {
                id: e.id,
                title: e.title,
                goal,
                content,
                source,
                user_id: e.user_id,
            }
        })
        .collect();

    Ok(Batch {
        id: parsed.batch.id,
        name: parsed.batch.name,
        description: parsed.batch.description,
        default_goal,
        essays,
    })
}

/// Recursively load all `.toml` manifest files from a directory.
pub fn load_manifest_directory(dir: &Path) -> Result<Vec<Batch>> {
    let mut batches = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            batches.extend(load_manifest_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_manifest(&path) {
                Ok(batch) => batches.push(batch),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(batches)
}

/// A warning from batch validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The essay ID (if applicable).
    pub essay_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a batch for common issues.
pub fn validate_batch(batch: &Batch) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate essay IDs
    let mut seen_ids = std::collections::HashSet::new();
    for essay in &batch.essays {
        if !seen_ids.insert(&essay.id) {
            warnings.push(ValidationWarning {
                essay_id: Some(essay.id.clone()),
                message: format!("duplicate essay ID: {}", essay.id),
            });
        }
    }

    // Check for empty essays (missing file, missing content, or blank)
    for essay in &batch.essays {
        if essay.content.trim().is_empty() {
            warnings.push(ValidationWarning {
                essay_id: Some(essay.id.clone()),
                message: "essay has no content".into(),
            });
        }
    }

    // Ambiguous content source
    for essay in &batch.essays {
        if let ContentSource::Conflict(path) = &essay.source {
            warnings.push(ValidationWarning {
                essay_id: Some(essay.id.clone()),
                message: format!(
                    "both path ({path}) and inline content given; using inline content"
                ),
            });
        }
    }

    // Unknown goals still score, but get no goal-specific suggestion
    for essay in &batch.essays {
        if let Some(Goal::Other(label)) = &essay.goal {
            warnings.push(ValidationWarning {
                essay_id: Some(essay.id.clone()),
                message: format!(
                    "goal '{label}' is not a known goal; no goal-specific suggestions will be generated"
                ),
            });
        }
    }

    if batch.essays.is_empty() {
        warnings.push(ValidationWarning {
            essay_id: None,
            message: "batch contains no essays".into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[batch]
id = "fall-drafts"
name = "Fall Application Drafts"
description = "First drafts from the fall cohort"
default_goal = "leadership"

[[essays]]
id = "maya-draft-1"
title = "Robotics Club"
goal = "leadership"
user_id = "maya"
content = """
I led our robotics club through a season that changed how I think.
"""

[[essays]]
id = "sam-draft-1"
goal = "resilience"
content = "The moment I realized I had overcome the challenge, everything changed."
"#;

    #[test]
    fn parse_valid_toml() {
        let batch = parse_manifest_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(batch.id, "fall-drafts");
        assert_eq!(batch.name, "Fall Application Drafts");
        assert_eq!(batch.default_goal, Goal::Leadership);
        assert_eq!(batch.essays.len(), 2);
        assert_eq!(batch.essays[0].id, "maya-draft-1");
        assert_eq!(batch.essays[0].goal, Some(Goal::Leadership));
        assert_eq!(batch.essays[0].user_id.as_deref(), Some("maya"));
        assert!(batch.essays[1].content.contains("overcome"));
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[batch]
id = "bare"
name = "Bare Minimum"

[[essays]]
id = "only"
content = "Just some text."
"#;
        let batch = parse_manifest_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(batch.default_goal, Goal::Other("general".into()));
        assert!(batch.essays[0].goal.is_none());
        assert!(batch.essays[0].title.is_none());
        assert_eq!(
            batch.essays[0].goal_or(&batch.default_goal),
            &Goal::Other("general".into())
        );
    }

    #[test]
    fn parse_essay_from_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("essay.txt"), "I wondered why.").unwrap();
        let toml = r#"
[batch]
id = "files"
name = "Files"

[[essays]]
id = "on-disk"
goal = "curiosity"
path = "essay.txt"
"#;
        let manifest_path = dir.path().join("batch.toml");
        std::fs::write(&manifest_path, toml).unwrap();

        let batch = parse_manifest(&manifest_path).unwrap();
        assert_eq!(batch.essays[0].content, "I wondered why.");
        assert_eq!(
            batch.essays[0].source,
            ContentSource::File("essay.txt".into())
        );
    }

    #[test]
    fn validate_path_and_content_conflict() {
        let toml = r#"
[batch]
id = "ambiguous"
name = "Ambiguous Source"

[[essays]]
id = "dual"
path = "draft.txt"
content = "Inline wins."
"#;
        let batch = parse_manifest_str(toml, &PathBuf::from("test.toml")).unwrap();
        // Inline content wins; the path is never read.
        assert_eq!(batch.essays[0].content, "Inline wins.");
        assert_eq!(
            batch.essays[0].source,
            ContentSource::Conflict("draft.txt".into())
        );

        let warnings = validate_batch(&batch);
        assert!(warnings
            .iter()
            .any(|w| w.essay_id.as_deref() == Some("dual")
                && w.message.contains("both path")));
    }

    #[test]
    fn missing_essay_file_yields_empty_content() {
        let toml = r#"
[batch]
id = "broken"
name = "Broken"

[[essays]]
id = "gone"
path = "does-not-exist.txt"
"#;
        let batch = parse_manifest_str(toml, &PathBuf::from("/tmp/batch.toml")).unwrap();
        assert!(batch.essays[0].content.is_empty());
        let warnings = validate_batch(&batch);
        assert!(warnings.iter().any(|w| w.message.contains("no content")));
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[batch]
id = "conflict"
name = "Conflicting IDs"

[[essays]]
id = "draft-a"
content = "First."

[[essays]]
id = "draft-a"
content = "Second."
"#;
        let batch = parse_manifest_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_batch(&batch);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_unknown_goal() {
        let toml = r#"
[batch]
id = "odd"
name = "Odd"

[[essays]]
id = "e1"
goal = "perseverance"
content = "Some text."
"#;
        let batch = parse_manifest_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_batch(&batch);
        assert!(warnings.iter().any(|w| w.message.contains("perseverance")));
    }

    #[test]
    fn validate_empty_batch() {
        let toml = r#"
[batch]
id = "empty"
name = "Empty"
"#;
        let batch = parse_manifest_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_batch(&batch);
        assert!(warnings.iter().any(|w| w.message.contains("no essays")));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "[batch\nid = unclosed";
        let result = parse_manifest_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("batch.toml"), VALID_TOML).unwrap();

        let batches = load_manifest_directory(dir.path()).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].id, "fall-drafts");
    }
}
