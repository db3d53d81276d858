//! File-based pipeline tests for `detect_files`.

use std::fs;
use std::path::PathBuf;

use rs_overlap_core::{detect_files, DocumentRole, OverlapError, DEFAULT_TUPLE_SIZE};
use tempfile::TempDir;

/// Writes the three input files into a fresh temporary directory.
fn fixture(synonyms: &str, reference: &str, candidate: &str) -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let syns = dir.path().join("syns.txt");
    let file1 = dir.path().join("file1.txt");
    let file2 = dir.path().join("file2.txt");
    fs::write(&syns, synonyms).unwrap();
    fs::write(&file2, reference).unwrap();
    fs::write(&file1, candidate).unwrap();
    (dir, syns, file2, file1)
}

#[test]
fn test_jog_run_sample() {
    let (_dir, syns, reference, candidate) = fixture("run sprint jog\n", "go for a jog\n", "go for a run\n");
    let report = detect_files(&syns, &reference, &candidate, DEFAULT_TUPLE_SIZE).unwrap();
    assert_eq!(report.total_count, 2);
    assert_eq!(report.duplicate_count, 2);
    assert_eq!(report.to_string(), "100%");
}

#[test]
fn test_partial_overlap_across_lines() {
    let (_dir, syns, reference, candidate) = fixture(
        "",
        "The quick brown fox,\njumps over\nthe lazy dog.",
        "the quick brown fox jumps over the sleepy cat",
    );
    // Candidate windows: 7, shared with reference: "quick brown fox", "brown fox jumps",
    // "fox jumps over", "jumps over the"
    let report = detect_files(&syns, &reference, &candidate, 3).unwrap();
    assert_eq!(report.total_count, 7);
    assert_eq!(report.duplicate_count, 4);
    assert_eq!(report.percent, 57);
}

#[test]
fn test_accumulated_synonym_groups() {
    // "run" belongs to two groups, so it expands to both "jog" and "sprint"
    let (_dir, syns, reference, candidate) = fixture(
        "jog run\nrun sprint\n",
        "they sprint home",
        "they run home",
    );
    assert_eq!(detect_files(&syns, &reference, &candidate, 2).unwrap().percent, 100);
}

#[test]
fn test_tuple_size_checked_against_reference() {
    let (_dir, syns, reference, candidate) = fixture("", "two words", "three words here");
    let err = detect_files(&syns, &reference, &candidate, 3).unwrap_err();
    assert!(matches!(
        err,
        OverlapError::InvalidTupleSize { document: DocumentRole::Reference, word_count: 2, .. }
    ));
}

#[test]
fn test_tuple_size_checked_against_candidate() {
    let (_dir, syns, reference, candidate) = fixture("", "three words here", "two words");
    let err = detect_files(&syns, &reference, &candidate, 3).unwrap_err();
    assert!(matches!(
        err,
        OverlapError::InvalidTupleSize { document: DocumentRole::Candidate, word_count: 2, .. }
    ));
}

#[test]
fn test_missing_synonym_file() {
    let (dir, _syns, reference, candidate) = fixture("", "a b c", "a b c");
    let missing = dir.path().join("missing.txt");
    match detect_files(&missing, &reference, &candidate, 3) {
        Err(OverlapError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_missing_candidate_file() {
    let (dir, syns, reference, _candidate) = fixture("", "a b c", "a b c");
    let missing = dir.path().join("missing.txt");
    let err = detect_files(&syns, &reference, &missing, 3).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}
