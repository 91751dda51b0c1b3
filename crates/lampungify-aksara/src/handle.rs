// AksaraHandle: top-level integration point for Lampung transliteration.
//
// Owns the syllabifier options and provides one API for syllabification,
// Latin -> aksara encoding, aksara -> Latin decoding and font lookup. The
// CLI, WASM and C bindings all go through it.
//
// The handle holds no caches or interior mutability, so it is Send + Sync
// and can be shared between threads behind a plain reference.

use crate::AksaraError;
use crate::decoder;
use crate::encoder;
use crate::font::{self, FontClass};
use crate::syllabifier::{self, SyllabifierOptions};

/// Top-level handle for Lampung transliteration.
#[derive(Debug, Clone, Default)]
pub struct AksaraHandle {
    syllabifier_options: SyllabifierOptions,
}

impl AksaraHandle {
    /// Create a handle with the default diphthongs ("ai", "au").
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(syllabifier_options: SyllabifierOptions) -> Self {
        Self {
            syllabifier_options,
        }
    }

    // =========================================================================
    // Transliteration
    // =========================================================================

    /// Split one word into syllables.
    pub fn syllabify(&self, word: &str) -> Vec<String> {
        syllabifier::syllabify(word, &self.syllabifier_options)
    }

    /// Split text on spaces and syllabify every word.
    pub fn syllabify_text(&self, text: &str) -> Vec<Vec<String>> {
        syllabifier::syllabify_text(text, &self.syllabifier_options)
    }

    /// Encode Latin text as aksara marker text.
    pub fn to_aksara(&self, text: &str) -> String {
        encoder::transliterate_to_script(text, &self.syllabifier_options)
    }

    /// Decode aksara marker text back to Latin (best effort).
    pub fn to_latin(&self, marker_text: &str) -> String {
        decoder::transliterate_to_latin(marker_text)
    }

    /// Resolve a font name to its CSS class.
    pub fn font(&self, name: Option<&str>) -> FontClass {
        font::resolve_font(name)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Replace the set of vowel pairs kept together as diphthongs.
    ///
    /// On error the current set is left unchanged.
    pub fn set_vowel_pair_exceptions<S: AsRef<str>>(
        &mut self,
        pairs: &[S],
    ) -> Result<(), AksaraError> {
        self.syllabifier_options = SyllabifierOptions::with_vowel_pair_exceptions(pairs)?;
        Ok(())
    }

    /// The current diphthongs, sorted.
    pub fn vowel_pair_exceptions(&self) -> Vec<String> {
        self.syllabifier_options.vowel_pair_exceptions()
    }

    pub fn options(&self) -> &SyllabifierOptions {
        &self.syllabifier_options
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AksaraHandle>();
    }

    #[test]
    fn to_aksara_and_back() {
        let handle = AksaraHandle::new();
        let aksara = handle.to_aksara("sikam haga mengan");
        assert_eq!(aksara, "sikm/ hg meGA");
        assert_eq!(handle.to_latin(&aksara), "sikam haga mengan");
    }

    #[test]
    fn syllabify_through_handle() {
        let handle = AksaraHandle::new();
        assert_eq!(handle.syllabify("animal"), vec!["a", "ni", "mal"]);
        assert_eq!(handle.syllabify_text("ha ga").len(), 2);
    }

    #[test]
    fn font_through_handle() {
        let handle = AksaraHandle::new();
        assert_eq!(handle.font(None).class, "lampung-suarnadipa");
        assert_eq!(handle.font(Some("Lampung Kaganga")).class, "lampung-kaganga");
    }

    #[test]
    fn set_exceptions_changes_syllabification() {
        let mut handle = AksaraHandle::new();
        assert_eq!(handle.syllabify("buat"), vec!["bu", "at"]);

        handle.set_vowel_pair_exceptions(&["ua"]).unwrap();
        assert_eq!(handle.vowel_pair_exceptions(), vec!["ua"]);
        assert_eq!(handle.syllabify("buat"), vec!["buat"]);
    }

    #[test]
    fn invalid_exceptions_keep_previous_set() {
        let mut handle = AksaraHandle::new();
        let result = handle.set_vowel_pair_exceptions(&["ua", "xy"]);
        match result {
            Err(AksaraError::InvalidVowelPair(pair)) => assert_eq!(pair, "xy"),
            Ok(()) => panic!("expected InvalidVowelPair"),
        }
        assert_eq!(handle.vowel_pair_exceptions(), vec!["ai", "au"]);
    }

    #[test]
    fn with_options_uses_given_exceptions() {
        let options = SyllabifierOptions::with_vowel_pair_exceptions(["ua"]).unwrap();
        let handle = AksaraHandle::with_options(options.clone());
        assert_eq!(handle.options(), &options);
    }

    #[test]
    fn version_is_set() {
        assert!(!AksaraHandle::get_version().is_empty());
    }
}
