//! Golden tests: Dutch reference words against recorded syllabifications.
//!
//! Run: cargo test -p lettergreep-nl --test golden

use std::path::PathBuf;

use lettergreep_nl::{LettergreepHandle, StressPolicy};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Golden file
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Golden {
    separator: String,
    cases: Vec<GoldenCase>,
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    ipa: String,
    syllables: Vec<String>,
    formatted: String,
    retain_leading: Vec<String>,
}

fn load_golden(filename: &str) -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn dutch_handle() -> LettergreepHandle {
    LettergreepHandle::dutch().unwrap_or_else(|e| panic!("failed to create handle: {e}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_strip_syllables() {
    let golden = load_golden("dutch.json");
    let handle = dutch_handle();

    let mut mismatches = Vec::new();
    for case in &golden.cases {
        let got = handle.syllables(&case.ipa);
        if got != case.syllables {
            mismatches.push(format!(
                "  {:?}: expected {:?}, got {:?}",
                case.ipa, case.syllables, got
            ));
        }
    }

    assert!(
        mismatches.is_empty(),
        "{} of {} golden words differ:\n{}",
        mismatches.len(),
        golden.cases.len(),
        mismatches.join("\n")
    );
}

#[test]
fn golden_formatted() {
    let golden = load_golden("dutch.json");
    let mut handle = dutch_handle();
    handle.set_separator(golden.separator.as_str());

    for case in &golden.cases {
        assert_eq!(handle.format(&case.ipa), case.formatted, "ipa: {:?}", case.ipa);
        assert_eq!(
            handle.syllable_count(&case.ipa),
            case.syllables.len(),
            "ipa: {:?}",
            case.ipa
        );
    }
}

#[test]
fn golden_retain_leading() {
    let golden = load_golden("dutch.json");
    let mut handle = dutch_handle();
    handle.set_stress_policy(StressPolicy::RetainLeading);

    for case in &golden.cases {
        assert_eq!(
            handle.syllables(&case.ipa),
            case.retain_leading,
            "ipa: {:?}",
            case.ipa
        );
    }
}

#[test]
fn golden_batch_matches_sequential() {
    let golden = load_golden("dutch.json");
    let handle = dutch_handle();

    let words: Vec<&str> = golden.cases.iter().map(|c| c.ipa.as_str()).collect();
    let batch = handle.syllabify_batch(&words);

    assert_eq!(batch.len(), words.len());
    for (word, result) in words.iter().zip(&batch) {
        assert_eq!(*result, handle.syllabify(word), "ipa: {word:?}");
    }
}
