use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{OverlapError, Result};

/// Maps each word to every synonym group it was declared in.
///
/// Each line of the synonym source is one group of interchangeable words.
/// A word's equivalence sequence is the concatenation, in line order, of all
/// the groups containing it.
///
/// # Invariants
/// - Every stored sequence contains its key at least once
/// - Sequences only grow while loading; duplicates are kept
/// - Tokens are stored verbatim (no case folding, no punctuation removal)
#[derive(Clone, Debug, Default)]
pub struct SynonymIndex {
	/// Word → concatenated groups it appeared in.
	/// Example: { "run" => ["jog", "run", "run", "sprint"] }
	synonyms: HashMap<String, Vec<String>>,
}

impl SynonymIndex {
	/// Creates an empty index: every word expands to itself only.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads synonym groups from a file, one group per line.
	///
	/// # Errors
	/// Returns `OverlapError::Io` if the file cannot be opened or read.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|e| OverlapError::io(path, e))?;
		let index = Self::from_reader(BufReader::new(file)).map_err(|e| OverlapError::io(path, e))?;
		debug!("Loaded {} synonym entries from {}", index.len(), path.display());
		Ok(index)
	}

	/// Reads synonym groups from any buffered reader, one group per line.
	pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
		let mut index = Self::new();
		for line in reader.lines() {
			index.add_group(&line?);
		}
		Ok(index)
	}

	/// Builds an index from in-memory text, one group per line.
	pub fn parse(text: &str) -> Self {
		let mut index = Self::new();
		for line in text.lines() {
			index.add_group(line);
		}
		index
	}

	/// Adds one group given as whitespace-separated words.
	///
	/// - If a word is already known, the whole group is appended to its sequence.
	/// - Otherwise the word's sequence is initialized to the group.
	///
	/// Blank lines are ignored.
	pub fn add_group(&mut self, line: &str) {
		let group: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
		for word in &group {
			self.synonyms
				.entry(word.clone())
				.and_modify(|existing| existing.extend(group.iter().cloned()))
				.or_insert_with(|| group.clone());
		}
	}

	/// Returns the equivalence sequence of `word`.
	///
	/// Unknown words expand to themselves alone.
	pub fn expand<'a>(&'a self, word: &str) -> Cow<'a, [String]> {
		match self.synonyms.get(word) {
			Some(group) => Cow::Borrowed(group.as_slice()),
			None => Cow::Owned(vec![word.to_owned()]),
		}
	}

	/// Returns `true` if `word` appears in at least one group.
	pub fn contains(&self, word: &str) -> bool {
		self.synonyms.contains_key(word)
	}

	/// Number of distinct words declared in any group.
	pub fn len(&self) -> usize {
		self.synonyms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.synonyms.is_empty()
	}
}
