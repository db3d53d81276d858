//! Error types for overlap detection.
//!
//! Every fallible operation returns [`OverlapError`]. The library never
//! terminates the process; the binary decides how each error is reported.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Which of the two compared documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
	/// The document whose n-grams are indexed.
	Reference,
	/// The document being scored against the reference.
	Candidate,
}

impl fmt::Display for DocumentRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DocumentRole::Reference => write!(f, "reference"),
			DocumentRole::Candidate => write!(f, "candidate"),
		}
	}
}

/// The main error type for overlap detection.
#[derive(Error, Debug)]
pub enum OverlapError {
	/// A synonym, reference or candidate file could not be read.
	#[error("Failed to read '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The tuple size does not fit in the document.
	#[error("Tuple size should be less than or equal to {word_count} (got {tuple_size}) for the {document} document")]
	InvalidTupleSize {
		tuple_size: usize,
		word_count: usize,
		document: DocumentRole,
	},

	/// A window must hold at least one word.
	#[error("Tuple size must be >= 1")]
	ZeroTupleSize,

	/// Scoring was requested before any reference document was indexed.
	#[error("No reference index built, call build_index first")]
	MissingIndex,
}

/// Result type alias for operations that may fail with `OverlapError`.
pub type Result<T> = std::result::Result<T, OverlapError>;

impl OverlapError {
	/// Create an I/O error tied to the file that failed.
	pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
		OverlapError::Io { path: path.as_ref().to_path_buf(), source }
	}

	/// Checks `tuple_size` against a document of `word_count` words.
	///
	/// # Errors
	/// - `ZeroTupleSize` if `tuple_size` is 0.
	/// - `InvalidTupleSize` if `tuple_size > word_count`.
	pub(crate) fn check_tuple_size(tuple_size: usize, word_count: usize, document: DocumentRole) -> Result<()> {
		if tuple_size == 0 {
			return Err(OverlapError::ZeroTupleSize);
		}
		if tuple_size > word_count {
			return Err(OverlapError::InvalidTupleSize { tuple_size, word_count, document });
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_tuple_size_message_reports_bound() {
		let err = OverlapError::check_tuple_size(5, 4, DocumentRole::Candidate).unwrap_err();
		assert_eq!(
			err.to_string(),
			"Tuple size should be less than or equal to 4 (got 5) for the candidate document"
		);
	}

	#[test]
	fn tuple_size_equal_to_length_is_accepted() {
		assert!(OverlapError::check_tuple_size(4, 4, DocumentRole::Reference).is_ok());
	}

	#[test]
	fn zero_tuple_size_is_rejected() {
		assert!(matches!(
			OverlapError::check_tuple_size(0, 4, DocumentRole::Reference),
			Err(OverlapError::ZeroTupleSize)
		));
	}
}
