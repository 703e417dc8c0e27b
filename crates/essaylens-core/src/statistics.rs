//! Aggregate statistics over analyzed essays.
//!
//! Everything here is derived from stored records. The original product
//! displayed a seeded "average improvement" constant; this module computes
//! the real figure from each student's first and latest drafts instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::EssayRecord;

/// Aggregate statistics across a set of essay records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Total essays analyzed.
    pub total_essays: usize,
    /// Distinct students with at least one essay (anonymous excluded).
    pub distinct_students: usize,
    /// Mean overall score.
    pub avg_overall: f64,
    /// Mean clarity score.
    pub avg_clarity: f64,
    /// Mean authenticity score.
    pub avg_authenticity: f64,
    /// Mean impact score.
    pub avg_impact: f64,
    /// Per-goal statistics keyed by goal label.
    pub per_goal: HashMap<String, GoalStats>,
    /// How many essays land in each overall-score band.
    pub score_distribution: ScoreDistribution,
    /// Mean percent change from each student's first to latest overall
    /// score, over students with at least two essays. `None` when no
    /// student has revised.
    pub avg_improvement_percent: Option<f64>,
}

/// Statistics for a single goal across all essays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalStats {
    /// Goal label.
    pub goal: String,
    /// Essays scored against this goal.
    pub count: usize,
    /// Mean overall score for this goal.
    pub avg_overall: f64,
    /// How often each suggestion was emitted for this goal.
    pub suggestion_counts: HashMap<String, usize>,
}

/// Overall-score histogram. Bands cover the reachable range [30, 100].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    /// Scores 30..=49.
    pub needs_work: usize,
    /// Scores 50..=69.
    pub developing: usize,
    /// Scores 70..=89.
    pub strong: usize,
    /// Scores 90..=100.
    pub exceptional: usize,
}

impl ScoreDistribution {
    fn record(&mut self, overall: i32) {
        match overall {
            ..=49 => self.needs_work += 1,
            50..=69 => self.developing += 1,
            70..=89 => self.strong += 1,
            _ => self.exceptional += 1,
        }
    }
}

fn mean(values: impl Iterator<Item = i32>) -> f64 {
    let mut sum = 0i64;
    let mut n = 0usize;
    for v in values {
        sum += i64::from(v);
        n += 1;
    }
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}

/// Compute aggregate statistics from essay records.
pub fn compute_aggregate_stats(records: &[EssayRecord]) -> AggregateStats {
    let avg_overall = mean(records.iter().map(|r| r.analysis.overall_score));
    let avg_clarity = mean(records.iter().map(|r| r.analysis.clarity_score));
    let avg_authenticity = mean(records.iter().map(|r| r.analysis.authenticity_score));
    let avg_impact = mean(records.iter().map(|r| r.analysis.impact_score));

    let mut distribution = ScoreDistribution::default();
    for r in records {
        distribution.record(r.analysis.overall_score);
    }

    // Per-goal breakdown
    let mut by_goal: HashMap<String, Vec<&EssayRecord>> = HashMap::new();
    for r in records {
        by_goal.entry(r.goal.to_string()).or_default().push(r);
    }

    let mut per_goal = HashMap::new();
    for (goal, goal_records) in &by_goal {
        let mut suggestion_counts: HashMap<String, usize> = HashMap::new();
        for r in goal_records {
            for s in &r.analysis.suggestions {
                *suggestion_counts.entry(s.clone()).or_default() += 1;
            }
        }
        per_goal.insert(
            goal.clone(),
            GoalStats {
                goal: goal.clone(),
                count: goal_records.len(),
                avg_overall: mean(goal_records.iter().map(|r| r.analysis.overall_score)),
                suggestion_counts,
            },
        );
    }

    // Distinct students and per-student improvement
    let mut by_student: HashMap<&str, Vec<&EssayRecord>> = HashMap::new();
    for r in records {
        if let Some(user) = r.user_id.as_deref() {
            by_student.entry(user).or_default().push(r);
        }
    }
    let distinct_students = by_student.len();

    let mut improvements = Vec::new();
    for essays in by_student.values_mut() {
        if essays.len() < 2 {
            continue;
        }
        essays.sort_by_key(|r| r.created_at);
        let first = essays.first().map(|r| r.analysis.overall_score);
        let latest = essays.last().map(|r| r.analysis.overall_score);
        if let (Some(first), Some(latest)) = (first, latest) {
            if first > 0 {
                improvements.push(f64::from(latest - first) / f64::from(first) * 100.0);
            }
        }
    }
    let avg_improvement_percent = if improvements.is_empty() {
        None
    } else {
        Some(improvements.iter().sum::<f64>() / improvements.len() as f64)
    };

    AggregateStats {
        total_essays: records.len(),
        distinct_students,
        avg_overall,
        avg_clarity,
        avg_authenticity,
        avg_impact,
        per_goal,
        score_distribution: distribution,
        avg_improvement_percent,
    }
}
