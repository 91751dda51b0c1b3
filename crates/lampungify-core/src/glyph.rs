// Glyph vocabulary shared by the encoder and the decoder.
//
// The encoder works on a buffer of `Glyph` cells. Decided glyphs are held as
// typed `Marker`s so that later rules can never match them as Latin letters.
// Rendering the buffer yields the marker text that Lampung fonts draw; each
// marker letter stands for exactly one script glyph.

use std::fmt;

use crate::character::{is_consonant, is_vowel};

/// Rendered form of the nengen (vowel killer / syllable separator).
pub const NENGEN_SYMBOL: char = '/';

/// A decided script glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Induk "nga".
    Nga,
    /// Induk "nya".
    Nya,
    /// Induk "gha".
    Gha,
    /// Final "ng" sign.
    CodaNg,
    /// Final "n" sign.
    CodaN,
    /// Final "h" sign.
    CodaH,
    /// Final "r" sign.
    CodaR,
    /// Diphthong "ai" sign.
    Ai,
    /// Diphthong "au" sign.
    Au,
    /// Vowel sign for "é".
    ETaling,
}

impl Marker {
    pub const ALL: [Marker; 10] = [
        Marker::Nga,
        Marker::Nya,
        Marker::Gha,
        Marker::CodaNg,
        Marker::CodaN,
        Marker::CodaH,
        Marker::CodaR,
        Marker::Ai,
        Marker::Au,
        Marker::ETaling,
    ];

    /// The letter this marker renders as in marker text.
    pub fn symbol(self) -> char {
        match self {
            Marker::Nga => 'G',
            Marker::Nya => 'N',
            Marker::Gha => 'H',
            Marker::CodaNg => 'X',
            Marker::CodaN => 'A',
            Marker::CodaH => 'x',
            Marker::CodaR => 'R',
            Marker::Ai => 'I',
            Marker::Au => 'W',
            Marker::ETaling => 'E',
        }
    }

    pub fn from_symbol(c: char) -> Option<Marker> {
        Self::ALL.into_iter().find(|m| m.symbol() == c)
    }

    /// Latin spelling of the glyph, without any inherent vowel.
    pub fn latin(self) -> &'static str {
        match self {
            Marker::Nga | Marker::CodaNg => "ng",
            Marker::Nya => "ny",
            Marker::Gha => "gh",
            Marker::CodaN => "n",
            Marker::CodaH => "h",
            Marker::CodaR => "r",
            Marker::Ai => "ai",
            Marker::Au => "au",
            Marker::ETaling => "\u{00E9}",
        }
    }

    /// Induk markers are base letters carrying an inherent "a".
    pub fn is_induk(self) -> bool {
        matches!(self, Marker::Nga | Marker::Nya | Marker::Gha)
    }

    /// Vowel-bearing signs replace the inherent vowel of their base.
    pub fn is_vowel_sign(self) -> bool {
        matches!(self, Marker::Ai | Marker::Au | Marker::ETaling)
    }
}

/// One cell of the transliteration buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A character not yet converted, or one passed through unchanged.
    Latin(char),
    Marker(Marker),
    Nengen,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Latin(c) => c,
            Glyph::Marker(m) => m.symbol(),
            Glyph::Nengen => NENGEN_SYMBOL,
        }
    }

    /// Return the Latin character held by this cell, if it is one.
    pub fn latin(self) -> Option<char> {
        match self {
            Glyph::Latin(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_latin(self, c: char) -> bool {
        self == Glyph::Latin(c)
    }

    pub fn is_marker(self, m: Marker) -> bool {
        self == Glyph::Marker(m)
    }

    /// A Latin vowel or a sign that supplies a vowel.
    pub fn is_vowel(self) -> bool {
        match self {
            Glyph::Latin(c) => is_vowel(c),
            Glyph::Marker(m) => m.is_vowel_sign(),
            Glyph::Nengen => false,
        }
    }

    /// Base letters carry an inherent "a": Latin consonants and induk markers.
    pub fn is_base(self) -> bool {
        match self {
            Glyph::Latin(c) => is_consonant(c),
            Glyph::Marker(m) => m.is_induk(),
            Glyph::Nengen => false,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Render a glyph buffer as marker text.
pub fn render(glyphs: &[Glyph]) -> String {
    glyphs.iter().map(|g| g.symbol()).collect()
}

/// Read marker text back into glyph cells.
///
/// Every marker letter is read as a marker, `/` as nengen, and everything else
/// as a Latin cell. Marker text produced by the encoder always reads back to
/// the buffer it was rendered from.
pub fn parse(text: &str) -> Vec<Glyph> {
    text.chars()
        .map(|c| {
            if c == NENGEN_SYMBOL {
                Glyph::Nengen
            } else if let Some(m) = Marker::from_symbol(c) {
                Glyph::Marker(m)
            } else {
                Glyph::Latin(c)
            }
        })
        .collect()
}
