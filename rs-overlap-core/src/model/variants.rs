use std::borrow::Cow;

use super::ngram_set::NGram;
use super::synonym_index::SynonymIndex;

/// Every synonym-substituted variant of an n-gram.
///
/// Iterates over the Cartesian product of the per-word expansions, in word
/// order: the first word's expansions vary slowest, the last word's fastest.
/// The original n-gram is always produced, since every word expands to at
/// least itself.
///
/// The iterator is lazy and finite; cloning a fresh one restarts the sequence.
#[derive(Clone, Debug)]
pub struct Variants<'a> {
	/// Expansion of each position of the n-gram.
	choices: Vec<Cow<'a, [String]>>,

	/// Current index into each expansion (an odometer).
	cursor: Vec<usize>,

	/// Set once the odometer wrapped around.
	exhausted: bool,
}

impl<'a> Variants<'a> {
	/// Expands each word of `ngram` through `synonyms`.
	pub fn new(ngram: &[String], synonyms: &'a SynonymIndex) -> Self {
		let choices: Vec<Cow<'a, [String]>> = ngram.iter().map(|word| synonyms.expand(word)).collect();
		let exhausted = choices.iter().any(|choice| choice.is_empty());
		Self { cursor: vec![0; choices.len()], choices, exhausted }
	}

	/// Total number of variants, duplicates included.
	pub fn count_all(&self) -> usize {
		self.choices.iter().map(|choice| choice.len()).product()
	}

	/// Moves the odometer one step, last position first.
	fn advance(&mut self) {
		for position in (0..self.cursor.len()).rev() {
			self.cursor[position] += 1;
			if self.cursor[position] < self.choices[position].len() {
				return;
			}
			self.cursor[position] = 0;
		}
		self.exhausted = true;
	}
}

impl Iterator for Variants<'_> {
	type Item = NGram;

	fn next(&mut self) -> Option<Self::Item> {
		if self.exhausted {
			return None;
		}

		let variant = self
			.cursor
			.iter()
			.zip(&self.choices)
			.map(|(&index, choice)| choice[index].clone())
			.collect();
		self.advance();
		Some(variant)
	}
}
