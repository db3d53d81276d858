use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{OverlapError, Result};

/// Characters removed from documents before splitting into words.
const PUNCTUATION: [char; 2] = ['.', ','];

/// Reads a whole text file into memory.
///
/// The returned error carries the path that failed.
pub(crate) fn read_document<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| OverlapError::io(path, source))?;
	Ok(contents)
}

/// Removes every `.` and `,` from the text.
///
/// Literal removal, not boundary-aware:
/// `"U.S."` → `"US"`
pub(crate) fn remove_punctuation(text: &str) -> String {
	text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Strips punctuation and splits the text on whitespace.
///
/// Line breaks count as whitespace.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
	remove_punctuation(text)
		.split_whitespace()
		.map(str::to_owned)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn punctuation_is_removed_literally() {
		assert_eq!(remove_punctuation("U.S. army, navy."), "US army navy");
		assert_eq!(remove_punctuation("3,141.59"), "314159");
		assert_eq!(remove_punctuation("no-change!"), "no-change!");
	}

	#[test]
	fn tokenize_ignores_punctuation_and_line_breaks() {
		assert_eq!(tokenize("Hello, world."), tokenize("Hello world"));
		assert_eq!(tokenize("one\ntwo\r\n  three\tfour"), vec!["one", "two", "three", "four"]);
		assert!(tokenize(" , . \n").is_empty());
	}

	#[test]
	fn tokenize_keeps_case() {
		assert_eq!(tokenize("The the THE"), vec!["The", "the", "THE"]);
	}

	#[test]
	fn read_document_reports_the_failing_path() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("missing.txt");
		match read_document(&missing) {
			Err(OverlapError::Io { path, .. }) => assert_eq!(path, missing),
			other => panic!("expected an I/O error, got {:?}", other),
		}
	}

	#[test]
	fn read_document_returns_whole_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "first line\nsecond line").unwrap();
		assert_eq!(read_document(file.path()).unwrap(), "first line\nsecond line");
	}
}
