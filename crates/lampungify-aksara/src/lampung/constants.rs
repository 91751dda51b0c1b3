// Lampung orthographic constants shared by the syllabifier and the encoder.

/// Vowel pairs that form a diphthong and are never split into two syllables.
pub(crate) const DEFAULT_VOWEL_PAIR_EXCEPTIONS: &[[char; 2]] = &[['a', 'i'], ['a', 'u']];

/// Loanword letters replaced by their nearest native spelling before encoding.
pub(crate) const LOANWORD_SUBSTITUTIONS: &[(char, &str)] =
    &[('v', "p"), ('f', "p"), ('x', "ks"), ('z', "j")];

/// Letters that may not follow "nya" for it to collapse straight into the
/// bare nya glyph. After one of these the general ny rule applies instead.
pub(crate) const NYA_BLOCKERS: &[char] = &['i', 'o', 'n', 'u', 'h'];
