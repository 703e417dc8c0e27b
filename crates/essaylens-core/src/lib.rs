//! essaylens-core — Essay scoring engine, data model, and statistics.
//!
//! This crate defines the heuristic scoring engine, the fundamental data
//! model, and the aggregation logic that the rest of essaylens builds on.

pub mod analyzer;
pub mod lexicon;
pub mod manifest;
pub mod model;
pub mod report;
pub mod statistics;
