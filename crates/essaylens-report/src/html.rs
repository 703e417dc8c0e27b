//! HTML report generator.
//!
//! Renders a batch run as one self-contained page: aggregate figures up
//! top, then a card per essay with an SVG score chart and the suggestions.
//! No external assets, so the file can be mailed or archived as-is.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use essaylens_core::report::{BatchReport, ScoredEssay};

/// Escape text for HTML element and attribute positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Bar color for a score, using the same bands as the feedback sheet.
fn score_color(score: i32) -> &'static str {
    match score {
        90..=100 => "#15803d",
        70..=89 => "#2563eb",
        50..=69 => "#ca8a04",
        _ => "#dc2626",
    }
}

/// Generate an HTML page from a batch report.
pub fn generate_html(report: &BatchReport) -> String {
    let agg = &report.aggregate;

    let mut cards = String::new();
    for scored in &report.results {
        cards.push_str(&essay_card(scored));
    }

    let improvement = agg
        .avg_improvement_percent
        .map(|p| format!("{p:+.1}%"))
        .unwrap_or_else(|| "n/a".to_string());

    let raw_json = escape(&serde_json::to_string_pretty(report).unwrap_or_default());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name} | essaylens</title>
<style>{css}</style>
</head>
<body>
<header>
<h1>essaylens</h1>
<p class="sub">{name} &middot; {count} essays &middot; {when}</p>
</header>
<section>
<h2>Totals</h2>
<dl class="totals">
<div><dt>Avg overall</dt><dd>{overall:.1}</dd></div>
<div><dt>Avg clarity</dt><dd>{clarity:.1}</dd></div>
<div><dt>Avg authenticity</dt><dd>{auth:.1}</dd></div>
<div><dt>Avg impact</dt><dd>{impact:.1}</dd></div>
<div><dt>Improvement</dt><dd>{improvement}</dd></div>
</dl>
</section>
<section>
<h2>Essays</h2>
{cards}</section>
<section>
<details><summary>Raw report JSON</summary>
<pre><code>{raw_json}</code></pre>
</details>
</section>
</body>
</html>"#,
        name = escape(&report.batch.name),
        css = CSS,
        count = report.batch.essay_count,
        when = report.created_at.format("%Y-%m-%d %H:%M UTC"),
        overall = agg.avg_overall,
        clarity = agg.avg_clarity,
        auth = agg.avg_authenticity,
        impact = agg.avg_impact,
    )
}

fn essay_card(scored: &ScoredEssay) -> String {
    let analysis = &scored.record.analysis;
    let title = scored
        .record
        .title
        .as_deref()
        .unwrap_or(scored.essay_id.as_str());

    let mut card = String::new();
    let _ = write!(
        card,
        "<article class=\"card\">\n<h3>{} <small>{}</small></h3>\n\
         <p class=\"sub\">{} words &middot; {} sentences</p>\n",
        escape(title),
        escape(&scored.record.goal.to_string()),
        analysis.word_count,
        analysis.sentence_count,
    );

    card.push_str(&score_chart(&[
        ("Clarity", analysis.clarity_score),
        ("Authenticity", analysis.authenticity_score),
        ("Impact", analysis.impact_score),
        ("Overall", analysis.overall_score),
    ]));

    if !analysis.suggestions.is_empty() {
        card.push_str("<ul>\n");
        for suggestion in &analysis.suggestions {
            let _ = writeln!(card, "<li>{}</li>", escape(suggestion));
        }
        card.push_str("</ul>\n");
    }

    card.push_str("</article>\n");
    card
}

// Chart geometry. Scores are 0..=100; bar length is score * SCALE / 10 px.
const BAR_H: usize = 18;
const GAP: usize = 9;
const LABEL_W: usize = 100;
const SCALE: usize = 26;

fn score_chart(scores: &[(&str, i32)]) -> String {
    let height = scores.len() * (BAR_H + GAP);
    let mut svg = format!(
        "<svg role=\"img\" width=\"{}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        LABEL_W + SCALE * 10 + 40,
    );

    for (row, (label, score)) in scores.iter().enumerate() {
        let y = row * (BAR_H + GAP);
        let len = (*score).max(0) as usize * SCALE / 10;
        let mid = y + BAR_H / 2 + 1;

        let _ = writeln!(
            svg,
            "<text x=\"{}\" y=\"{mid}\" text-anchor=\"end\" dominant-baseline=\"middle\" font-size=\"12\">{label}</text>",
            LABEL_W - 6,
        );
        let _ = writeln!(
            svg,
            "<rect x=\"{LABEL_W}\" y=\"{y}\" width=\"{len}\" height=\"{BAR_H}\" rx=\"3\" fill=\"{}\"/>",
            score_color(*score),
        );
        let _ = writeln!(
            svg,
            "<text x=\"{}\" y=\"{mid}\" dominant-baseline=\"middle\" font-size=\"11\">{score}</text>",
            LABEL_W + len + 5,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &BatchReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = "\
body{max-width:760px;margin:0 auto;padding:1.5rem;color:#1f2937;\
font:15px/1.5 system-ui,sans-serif}\
h1{margin-bottom:0}\
.sub{color:#6b7280;margin-top:.25rem}\
.totals{display:flex;gap:1.5rem;flex-wrap:wrap}\
.totals dt{font-size:.8rem;color:#6b7280;text-transform:uppercase}\
.totals dd{margin:0;font-size:1.4rem;font-weight:600}\
.card{border:1px solid #d1d5db;border-radius:6px;padding:.75rem 1.25rem;\
margin:1rem 0}\
.card h3 small{color:#6b7280;font-weight:400}\
.card li{margin:.2rem 0}\
text{fill:#1f2937}\
pre{background:#f3f4f6;padding:.75rem;border-radius:6px;overflow-x:auto;\
font-size:.8rem}\
summary{cursor:pointer}";
