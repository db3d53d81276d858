//! Top-level module for the overlap detection system.
//!
//! This module provides:
//! - Synonym groups and per-word expansion (`SynonymIndex`)
//! - Reference n-gram membership index (`NGramSet`)
//! - Synonym-substituted variants of an n-gram (`Variants`)
//! - The scoring entry point (`OverlapDetector`)
//! - The scoring result (`OverlapReport`)

/// Word → equivalence sequence mapping built from synonym groups.
///
/// Groups accumulate per word; nothing is deduplicated.
pub mod synonym_index;

/// Set of fixed-size word tuples extracted from a reference document.
pub mod ngram_set;

/// Lazy Cartesian product over per-word synonym expansions.
pub mod variants;

/// High-level interface: index a reference, score a candidate.
pub mod detector;

/// Counts and percentage produced by a scoring run.
pub mod report;
