//! essaylens-report — Rendered output for essaylens reports.
//!
//! Two renderers: a self-contained HTML page for a batch run, and a
//! per-essay markdown feedback sheet for handing back to a student.

pub mod feedback;
pub mod html;
