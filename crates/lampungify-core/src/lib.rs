//! Shared character and glyph vocabulary for Lampung transliteration.
//!
//! - [`character`] -- vowel set, digraph table and character predicates
//! - [`glyph`] -- typed marker glyphs and the marker-text codec

pub mod character;
pub mod glyph;
