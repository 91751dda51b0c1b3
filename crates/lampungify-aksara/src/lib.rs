//! Lampung Aksara transliteration.
//!
//! Converts Latin-script Lampung text into aksara marker text, where every
//! Latin character stands for a glyph of the Lampung script font, and back.
//!
//! # Architecture
//!
//! - [`syllabifier`] -- Greedy syllable scan, boundary repair, vowel-pair split
//! - [`encoder`] -- Ordered rule pipeline from Latin syllables to marker text
//! - [`decoder`] -- Best-effort marker text to Latin
//! - [`font`] -- Font name to CSS class lookup
//! - [`handle`] -- `AksaraHandle`, the configured entry point
//!
//! The free functions below use the default syllabifier options.

use std::sync::LazyLock;

pub mod decoder;
pub mod encoder;
pub mod font;
pub mod handle;
pub mod syllabifier;

mod lampung;

pub use font::{Font, FontClass};
pub use handle::AksaraHandle;
pub use syllabifier::SyllabifierOptions;

/// Error type for transliteration configuration.
#[derive(Debug, thiserror::Error)]
pub enum AksaraError {
    #[error("invalid vowel pair exception: {0:?} (expected exactly two vowels)")]
    InvalidVowelPair(String),
}

static DEFAULT_OPTIONS: LazyLock<SyllabifierOptions> = LazyLock::new(SyllabifierOptions::default);

/// Encode Latin text as aksara marker text.
pub fn transliterate_to_script(text: &str) -> String {
    encoder::transliterate_to_script(text, &DEFAULT_OPTIONS)
}

/// Decode aksara marker text back to Latin (best effort).
pub fn transliterate_to_latin(marker_text: &str) -> String {
    decoder::transliterate_to_latin(marker_text)
}

/// Split one word into syllables.
pub fn syllabify(word: &str) -> Vec<String> {
    syllabifier::syllabify(word, &DEFAULT_OPTIONS)
}

/// Resolve a font name to its CSS class.
pub fn resolve_font(name: Option<&str>) -> FontClass {
    font::resolve_font(name)
}
