use log::{debug, info, trace};

use crate::error::{DocumentRole, OverlapError, Result};
use crate::io::tokenize;
use super::ngram_set::NGramSet;
use super::report::OverlapReport;
use super::synonym_index::SynonymIndex;
use super::variants::Variants;

/// Window width used when none is given.
pub const DEFAULT_TUPLE_SIZE: usize = 3;

/// Scores how much of a candidate document appears in a reference document.
///
/// # Responsibilities
/// - Index the n-grams of a reference text (`build_index`)
/// - Expand each candidate n-gram through a `SynonymIndex`
/// - Count candidate windows having at least one variant in the reference
///
/// Both documents are tokenized the same way: `.` and `,` are removed, then
/// the text is split on whitespace.
#[derive(Clone, Debug)]
pub struct OverlapDetector {
	/// Window width applied to both documents.
	tuple_size: usize,

	/// N-grams of the reference document, once indexed.
	reference: Option<NGramSet>,
}

impl Default for OverlapDetector {
	fn default() -> Self {
		Self::new(DEFAULT_TUPLE_SIZE)
	}
}

impl OverlapDetector {
	/// Creates a detector with no reference indexed yet.
	///
	/// The tuple size is validated against each document when it is used.
	pub fn new(tuple_size: usize) -> Self {
		Self { tuple_size, reference: None }
	}

	/// Creates a detector and indexes `reference_text` right away.
	pub fn with_reference(tuple_size: usize, reference_text: &str) -> Result<Self> {
		let mut detector = Self::new(tuple_size);
		detector.build_index(reference_text)?;
		Ok(detector)
	}

	pub fn tuple_size(&self) -> usize {
		self.tuple_size
	}

	/// The reference index, if built.
	pub fn reference(&self) -> Option<&NGramSet> {
		self.reference.as_ref()
	}

	/// Indexes every n-gram of `reference_text`, replacing any previous index.
	///
	/// # Errors
	/// Returns `InvalidTupleSize` (or `ZeroTupleSize`) if the tuple size does
	/// not fit the reference document. The previous index is kept in that case.
	pub fn build_index(&mut self, reference_text: &str) -> Result<&NGramSet> {
		let words = tokenize(reference_text);
		let ngrams = NGramSet::from_words(&words, self.tuple_size, DocumentRole::Reference)?;
		debug!(
			"Indexed {} distinct {}-grams from {} reference words",
			ngrams.len(),
			self.tuple_size,
			words.len()
		);
		Ok(&*self.reference.insert(ngrams))
	}

	/// Scores `candidate_text` and returns the full counts.
	///
	/// Each window of the candidate counts as a duplicate if any of its
	/// synonym-substituted variants is in the reference index. Checking stops
	/// at the first matching variant.
	///
	/// # Errors
	/// - `MissingIndex` if `build_index` was never called.
	/// - `InvalidTupleSize` / `ZeroTupleSize` if the tuple size does not fit
	///   the candidate document.
	pub fn score_report(&self, candidate_text: &str, synonyms: &SynonymIndex) -> Result<OverlapReport> {
		let reference = self.reference.as_ref().ok_or(OverlapError::MissingIndex)?;

		let words = tokenize(candidate_text);
		OverlapError::check_tuple_size(self.tuple_size, words.len(), DocumentRole::Candidate)?;

		let total_count = words.len() - self.tuple_size + 1;
		let mut duplicate_count = 0;

		for (position, window) in words.windows(self.tuple_size).enumerate() {
			let mut variants = Variants::new(window, synonyms);
			if let Some(matched) = variants.find(|variant| reference.contains(variant)) {
				trace!("Window {} {:?} matched as {:?}", position, window, matched);
				duplicate_count += 1;
			}
		}

		let report = OverlapReport::new(self.tuple_size, duplicate_count, total_count);
		info!("{} of {} candidate {}-grams found in reference", duplicate_count, total_count, self.tuple_size);
		Ok(report)
	}

	/// Scores `candidate_text` and returns the truncated percentage.
	///
	/// See `score_report` for errors.
	pub fn score(&self, candidate_text: &str, synonyms: &SynonymIndex) -> Result<usize> {
		Ok(self.score_report(candidate_text, synonyms)?.percent)
	}
}
