//! Golden-file tests: check the public API against recorded transliterations.
//!
//! Fixtures live in tests/golden/transliteration.json, one section per
//! operation.
//!
//! Run: cargo test -p lampungify-aksara --test golden

use std::path::PathBuf;

use serde::Deserialize;

use lampungify_aksara::{
    AksaraHandle, resolve_font, syllabify, transliterate_to_latin, transliterate_to_script,
};

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Case<I, E> {
    input: I,
    expected: E,
}

#[derive(Debug, Deserialize)]
struct Golden {
    syllabify: Vec<Case<String, Vec<String>>>,
    to_aksara: Vec<Case<String, String>>,
    to_latin: Vec<Case<String, String>>,
    font: Vec<Case<Option<String>, String>>,
}

fn load_golden() -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/transliteration.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_syllabify() {
    let golden = load_golden();
    let mut mismatches = Vec::new();
    for case in &golden.syllabify {
        let actual = syllabify(&case.input);
        if actual != case.expected {
            mismatches.push(format!(
                "{:?}: expected {:?}, got {:?}",
                case.input, case.expected, actual
            ));
        }
    }
    assert!(mismatches.is_empty(), "syllabify mismatches:\n{}", mismatches.join("\n"));
}

#[test]
fn golden_to_aksara() {
    let golden = load_golden();
    let handle = AksaraHandle::new();
    for case in &golden.to_aksara {
        assert_eq!(
            transliterate_to_script(&case.input),
            case.expected,
            "to_aksara({:?})",
            case.input
        );
        assert_eq!(handle.to_aksara(&case.input), case.expected);
    }
}

#[test]
fn golden_to_latin() {
    let golden = load_golden();
    for case in &golden.to_latin {
        assert_eq!(
            transliterate_to_latin(&case.input),
            case.expected,
            "to_latin({:?})",
            case.input
        );
    }
}

#[test]
fn golden_font() {
    let golden = load_golden();
    for case in &golden.font {
        assert_eq!(
            resolve_font(case.input.as_deref()).class,
            case.expected,
            "font({:?})",
            case.input
        );
    }
}

#[test]
fn syllables_concatenate_to_word() {
    let golden = load_golden();
    for case in golden.syllabify.iter().filter(|c| !c.input.is_empty()) {
        assert_eq!(syllabify(&case.input).concat(), case.input);
    }
}

#[test]
fn encoding_is_deterministic() {
    let golden = load_golden();
    for case in &golden.to_aksara {
        let first = transliterate_to_script(&case.input);
        let second = transliterate_to_script(&case.input);
        assert_eq!(first, second);
    }
}
