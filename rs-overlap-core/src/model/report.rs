use std::fmt;

use serde::Serialize;

/// Result of scoring a candidate document against a reference index.
///
/// `percent` is `floor(100 * duplicate_count / total_count)`, computed in
/// integer arithmetic.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlapReport {
	/// Window width used on both documents.
	pub tuple_size: usize,

	/// Candidate windows with at least one variant in the reference.
	pub duplicate_count: usize,

	/// Number of candidate windows (`words - tuple_size + 1`).
	pub total_count: usize,

	/// Truncated percentage of matched windows.
	pub percent: usize,
}

impl OverlapReport {
	/// Builds a report from raw counts.
	///
	/// `total_count` must be >= 1 (guaranteed by the tuple size check).
	pub(crate) fn new(tuple_size: usize, duplicate_count: usize, total_count: usize) -> Self {
		Self {
			tuple_size,
			duplicate_count,
			total_count,
			percent: 100 * duplicate_count / total_count,
		}
	}
}

/// Formats as the bare percentage, e.g. `66%`.
impl fmt::Display for OverlapReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}%", self.percent)
	}
}
