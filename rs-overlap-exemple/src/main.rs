use rs_overlap_core::{OverlapDetector, OverlapError, SynonymIndex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One group per line, every word of a line can replace any other.
    // "run" appears twice, so it expands to "jog", "run", "run" and "sprint"
    let synonyms = SynonymIndex::parse("jog run\nrun sprint\nquick fast");

    // Index the reference document with 2-word tuples
    // Only '.' and ',' are removed before splitting on whitespace
    let mut detector = OverlapDetector::new(2);
    let reference = detector.build_index("We went for a jog in the park, on a quick walk.")?;
    println!("Reference holds {} distinct tuples", reference.len());

    // Score a few candidates against the same index
    let candidates = [
        "We went for a run in the park",
        "We went for a sprint in the park on a fast walk",
        "Nothing in common here",
    ];
    for candidate in candidates {
        let report = detector.score_report(candidate, &synonyms)?;
        println!(
            "{:>4} ({} of {} tuples) <- {}",
            report.to_string(),
            report.duplicate_count,
            report.total_count,
            candidate
        );
    }

    // A tuple size larger than a document is rejected
    match detector.score("Too short", &synonyms) {
        Ok(_) => println!("Should not happen"),
        Err(OverlapError::InvalidTupleSize { word_count, .. }) => {
            println!("Candidate has only {} words, tuple size is {}", word_count, detector.tuple_size())
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
