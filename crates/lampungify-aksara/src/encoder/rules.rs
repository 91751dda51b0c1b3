// Rule tables for the Latin -> aksara encoder.
//
// Tables are applied top to bottom. Order matters: each rule only sees the
// Latin cells left over by the rules before it, and overrides are checked
// before the general rule they shadow.

use lampungify_core::character::Digraph;
use lampungify_core::glyph::Marker;

use crate::lampung::constants::NYA_BLOCKERS;

/// Which vowel may carry a coda sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Nucleus {
    /// Only the plain vowel "a".
    A,
    /// Any vowel, including vowel signs already placed.
    Any,
}

/// Special cases that shadow a general rule when they match.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Override {
    /// "nya" followed by neither a vowel nor one of `blockers` becomes the
    /// bare nya glyph.
    BareNya { blockers: &'static [char] },
    /// After a nya glyph, the Latin `letters` become `marker`.
    AfterNya {
        letters: &'static [char],
        marker: Marker,
    },
}

/// Digraph + vowel at the start of a cluster becomes an induk marker.
#[derive(Debug)]
pub(crate) struct PrefixRule {
    pub digraph: Digraph,
    pub marker: Marker,
    pub overrides: &'static [Override],
}

/// Vowel + closing letters becomes vowel + sign.
#[derive(Debug)]
pub(crate) struct CodaRule {
    pub nucleus: Nucleus,
    /// Alternative spellings of the closing letters.
    pub codas: &'static [&'static [char]],
    pub marker: Marker,
}

pub(crate) const PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule {
        digraph: Digraph::Ng,
        marker: Marker::Nga,
        overrides: &[],
    },
    PrefixRule {
        digraph: Digraph::Ny,
        marker: Marker::Nya,
        overrides: &[Override::BareNya {
            blockers: NYA_BLOCKERS,
        }],
    },
    PrefixRule {
        digraph: Digraph::Gh,
        marker: Marker::Gha,
        overrides: &[],
    },
];

/// Checked before every suffix rule. The nya glyph changes which coda sign
/// is correct after it.
pub(crate) const SUFFIX_OVERRIDES: &[Override] = &[
    Override::AfterNya {
        letters: &['a', 'h'],
        marker: Marker::CodaH,
    },
    Override::AfterNya {
        letters: &['r'],
        marker: Marker::CodaR,
    },
    Override::AfterNya {
        letters: &['a', 'u'],
        marker: Marker::Au,
    },
];

/// Codas of the vowel "a", applied before nengen placement.
pub(crate) const SUFFIX_RULES: &[CodaRule] = &[
    CodaRule {
        nucleus: Nucleus::A,
        codas: &[&['n', 'g']],
        marker: Marker::CodaNg,
    },
    CodaRule {
        nucleus: Nucleus::A,
        codas: &[&['n']],
        marker: Marker::CodaN,
    },
    CodaRule {
        nucleus: Nucleus::A,
        codas: &[&['h']],
        marker: Marker::CodaH,
    },
    CodaRule {
        nucleus: Nucleus::A,
        codas: &[&['r']],
        marker: Marker::CodaR,
    },
    CodaRule {
        nucleus: Nucleus::A,
        codas: &[&['i'], &['y']],
        marker: Marker::Ai,
    },
    CodaRule {
        nucleus: Nucleus::A,
        codas: &[&['u'], &['w']],
        marker: Marker::Au,
    },
];

/// Codas of any vowel, applied after nengen placement. A nengen right after
/// the closing letters is absorbed by the sign.
pub(crate) const DIACRITIC_RULES: &[CodaRule] = &[
    CodaRule {
        nucleus: Nucleus::Any,
        codas: &[&['n', 'g']],
        marker: Marker::CodaNg,
    },
    CodaRule {
        nucleus: Nucleus::Any,
        codas: &[&['n']],
        marker: Marker::CodaN,
    },
    CodaRule {
        nucleus: Nucleus::Any,
        codas: &[&['h']],
        marker: Marker::CodaH,
    },
    CodaRule {
        nucleus: Nucleus::Any,
        codas: &[&['r']],
        marker: Marker::CodaR,
    },
    CodaRule {
        nucleus: Nucleus::A,
        codas: &[&['i'], &['y']],
        marker: Marker::Ai,
    },
    CodaRule {
        nucleus: Nucleus::A,
        codas: &[&['u'], &['w']],
        marker: Marker::Au,
    },
];
