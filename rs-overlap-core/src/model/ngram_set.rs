use std::collections::HashSet;

use crate::error::{DocumentRole, OverlapError, Result};

/// An ordered tuple of consecutive words.
pub type NGram = Vec<String>;

/// Membership index of the n-grams of one document.
///
/// Built with a sliding window of width `tuple_size` and stride 1.
/// Repeated n-grams collapse into a single entry.
///
/// # Invariants
/// - `tuple_size` is always >= 1
/// - Every stored n-gram has exactly `tuple_size` words
#[derive(Clone, Debug)]
pub struct NGramSet {
	/// Window width (number of words per n-gram).
	tuple_size: usize,

	/// Distinct n-grams seen in the document.
	ngrams: HashSet<NGram>,
}

impl NGramSet {
	/// Indexes every window of `tuple_size` consecutive words.
	///
	/// `role` only tags the error message.
	///
	/// # Errors
	/// - `ZeroTupleSize` if `tuple_size` is 0.
	/// - `InvalidTupleSize` if the document has fewer than `tuple_size` words.
	pub fn from_words(words: &[String], tuple_size: usize, role: DocumentRole) -> Result<Self> {
		OverlapError::check_tuple_size(tuple_size, words.len(), role)?;

		let ngrams = words.windows(tuple_size).map(<[String]>::to_vec).collect();
		Ok(Self { tuple_size, ngrams })
	}

	/// Returns `true` if this exact word sequence was indexed.
	pub fn contains(&self, ngram: &[String]) -> bool {
		self.ngrams.contains(ngram)
	}

	/// The window width used to build this set.
	pub fn tuple_size(&self) -> usize {
		self.tuple_size
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.ngrams.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ngrams.is_empty()
	}

	/// Iterates over the distinct n-grams, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &NGram> {
		self.ngrams.iter()
	}
}
