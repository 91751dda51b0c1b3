// Character classification for Latin-script Lampung text.
//
// Every rule in the syllabifier, encoder and decoder branches on these
// predicates, so the vowel set and the digraph table live here and nowhere
// else.

// ---------------------------------------------------------------------------
// Lampung phonological constants
// ---------------------------------------------------------------------------

/// Lampung vowels (lowercase): a i u e o é ê
pub const LAMPUNG_VOWELS: &[char] = &['a', 'i', 'u', 'e', 'o', '\u{00E9}', '\u{00EA}'];

/// Punctuation the script writes with its own marks. A trailing run of these
/// is kept after a syllable's nengen, and the decoder strips them.
pub const SCRIPT_PUNCTUATION: &[char] =
    &['.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '-'];

/// Two-letter consonant clusters that behave as a single consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digraph {
    Ng,
    Ny,
    Gh,
    Kh,
}

impl Digraph {
    /// All digraphs, in the order the syllable scanner tries them.
    pub const ALL: [Digraph; 4] = [Digraph::Ng, Digraph::Ny, Digraph::Kh, Digraph::Gh];

    /// The two lowercase letters of this digraph.
    pub fn letters(self) -> [char; 2] {
        match self {
            Digraph::Ng => ['n', 'g'],
            Digraph::Ny => ['n', 'y'],
            Digraph::Gh => ['g', 'h'],
            Digraph::Kh => ['k', 'h'],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Digraph::Ng => "ng",
            Digraph::Ny => "ny",
            Digraph::Gh => "gh",
            Digraph::Kh => "kh",
        }
    }

    /// Match a digraph against two characters (case-insensitive).
    pub fn from_pair(first: char, second: char) -> Option<Digraph> {
        let pair = [fold_case(first), fold_case(second)];
        Self::ALL.into_iter().find(|d| d.letters() == pair)
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Lowercase a single character, keeping it unchanged when the lowercase form
/// is not a single character.
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Check whether a character is a Lampung vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    LAMPUNG_VOWELS.contains(&fold_case(c))
}

/// Check whether a character is a consonant letter: alphabetic but not a vowel.
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

/// Check whether a character belongs to the script punctuation class.
pub fn is_punctuation(c: char) -> bool {
    SCRIPT_PUNCTUATION.contains(&c)
}

/// Return the digraph starting at `pos`, if any.
pub fn digraph_at(chars: &[char], pos: usize) -> Option<Digraph> {
    match (chars.get(pos), chars.get(pos + 1)) {
        (Some(&a), Some(&b)) => Digraph::from_pair(a, b),
        _ => None,
    }
}

/// Return the digraph the slice ends with, if any.
pub fn ends_with_digraph(chars: &[char]) -> Option<Digraph> {
    let len = chars.len();
    if len < 2 {
        return None;
    }
    digraph_at(chars, len - 2)
}

/// Return the digraph the slice starts with, if any.
pub fn starts_with_digraph(chars: &[char]) -> Option<Digraph> {
    digraph_at(chars, 0)
}
