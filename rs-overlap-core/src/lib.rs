//! N-gram-based textual overlap detection library.
//!
//! This crate provides the building blocks of a plagiarism-style detector:
//! - Synonym groups loaded from plain text (`SynonymIndex`)
//! - Reference n-gram indexing (`NGramSet`)
//! - Synonym-aware candidate scoring (`OverlapDetector`)
//! - Internal utilities for file reading and tokenization
//!
//! File reading and punctuation handling are kept internal; callers work
//! with the high-level model API or the [`detect_files`] shortcut.

use std::path::Path;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Synonym expansion, n-gram indexing and overlap scoring.
pub mod model;

/// I/O utilities (file loading, tokenization).
///
/// Not exposed
pub(crate) mod io;

pub use error::{DocumentRole, OverlapError, Result};
pub use model::detector::{DEFAULT_TUPLE_SIZE, OverlapDetector};
pub use model::ngram_set::{NGram, NGramSet};
pub use model::report::OverlapReport;
pub use model::synonym_index::SynonymIndex;
pub use model::variants::Variants;

/// Runs the whole pipeline from files.
///
/// Loads the synonym groups, indexes the reference document and scores the
/// candidate document against it.
///
/// # Errors
/// - `OverlapError::Io` if any of the three files cannot be read.
/// - `OverlapError::InvalidTupleSize` / `OverlapError::ZeroTupleSize` if
///   `tuple_size` does not fit either document.
pub fn detect_files<S, R, C>(synonyms: S, reference: R, candidate: C, tuple_size: usize) -> Result<OverlapReport>
where
	S: AsRef<Path>,
	R: AsRef<Path>,
	C: AsRef<Path>,
{
	let synonym_index = SynonymIndex::load(synonyms)?;
	let mut detector = OverlapDetector::new(tuple_size);
	detector.build_index(&io::read_document(reference)?)?;
	detector.score_report(&io::read_document(candidate)?, &synonym_index)
}
