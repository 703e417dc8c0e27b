//! Batch report types with JSON persistence and draft comparison.
//!
//! A [`BatchReport`] captures one scoring run over a manifest. Comparing
//! two reports of the same batch shows how each essay moved between
//! drafts.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::EssayRecord;
use crate::statistics::AggregateStats;

/// A complete scoring run over a batch of essays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the batch.
    pub batch: BatchSummary,
    /// One entry per scored essay, keyed by its manifest ID.
    pub results: Vec<ScoredEssay>,
    /// Aggregate statistics over the run.
    pub aggregate: AggregateStats,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Summary of a batch (without the full essay texts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub id: String,
    pub name: String,
    pub essay_count: usize,
}

/// One scored essay inside a report: the manifest ID plus the stored
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredEssay {
    /// The essay's ID from the manifest.
    pub essay_id: String,
    /// The persisted analysis record.
    pub record: EssayRecord,
}

impl BatchReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: BatchReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this report against an earlier run of the same batch.
    ///
    /// Essays are matched by manifest ID; `threshold` is the minimum
    /// overall-score delta (in points) that counts as a change.
    pub fn compare(&self, baseline: &BatchReport, threshold: i32) -> DraftComparison {
        let score_map = |report: &BatchReport| -> HashMap<String, i32> {
            report
                .results
                .iter()
                .map(|r| (r.essay_id.clone(), r.record.analysis.overall_score))
                .collect()
        };

        let baseline_scores = score_map(baseline);
        let current_scores = score_map(self);

        let mut improved = Vec::new();
        let mut regressed = Vec::new();
        let mut unchanged = 0usize;
        let mut new_essays = 0usize;

        for (essay_id, &current) in &current_scores {
            if let Some(&baseline_val) = baseline_scores.get(essay_id) {
                let delta = current - baseline_val;
                if delta > threshold {
                    improved.push(EssayDelta {
                        essay_id: essay_id.clone(),
                        baseline_score: baseline_val,
                        current_score: current,
                        delta,
                    });
                } else if delta < -threshold {
                    regressed.push(EssayDelta {
                        essay_id: essay_id.clone(),
                        baseline_score: baseline_val,
                        current_score: current,
                        delta,
                    });
                } else {
                    unchanged += 1;
                }
            } else {
                new_essays += 1;
            }
        }

        let removed_essays = baseline_scores
            .keys()
            .filter(|k| !current_scores.contains_key(*k))
            .count();

        improved.sort_by(|a, b| b.delta.cmp(&a.delta));
        regressed.sort_by(|a, b| a.delta.cmp(&b.delta));

        DraftComparison {
            improved,
            regressed,
            unchanged,
            new_essays,
            removed_essays,
        }
    }
}

/// Result of comparing two reports of the same batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftComparison {
    /// Essays whose overall score went up, best first.
    pub improved: Vec<EssayDelta>,
    /// Essays whose overall score went down, worst first.
    pub regressed: Vec<EssayDelta>,
    /// Essays with no significant change.
    pub unchanged: usize,
    /// Essays in current but not baseline.
    pub new_essays: usize,
    /// Essays in baseline but not current.
    pub removed_essays: usize,
}

/// A per-essay score movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssayDelta {
    pub essay_id: String,
    pub baseline_score: i32,
    pub current_score: i32,
    pub delta: i32,
}

impl DraftComparison {
    /// Format the comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} improved, {} regressed, {} unchanged\n\n",
            self.improved.len(),
            self.regressed.len(),
            self.unchanged
        ));

        if !self.improved.is_empty() {
            md.push_str("### Improved\n\n");
            md.push_str("| Essay | Baseline | Current | Delta |\n");
            md.push_str("|-------|----------|---------|-------|\n");
            for e in &self.improved {
                md.push_str(&format!(
                    "| {} | {} | {} | +{} |\n",
                    e.essay_id, e.baseline_score, e.current_score, e.delta
                ));
            }
            md.push('\n');
        }

        if !self.regressed.is_empty() {
            md.push_str("### Regressed\n\n");
            md.push_str("| Essay | Baseline | Current | Delta |\n");
            md.push_str("|-------|----------|---------|-------|\n");
            for e in &self.regressed {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    e.essay_id, e.baseline_score, e.current_score, e.delta
                ));
            }
        }

        md
    }

    /// Returns true if any essay regressed.
    pub fn has_regressions(&self) -> bool {
        !self.regressed.is_empty()
    }
}
