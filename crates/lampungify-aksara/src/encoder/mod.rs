// Encoder -- Latin text to aksara marker text
//
// Words are syllabified and every syllable is encoded on its own through a
// fixed pipeline over one glyph buffer:
//  1. lowercase and nativize loanword letters
//  2. nengen between the consonants of an onset cluster
//  3. q -> k, é -> vowel sign
//  4. prefix rules (ng/ny/gh + vowel -> induk marker)
//  5. suffix rules (codas of "a"), with nya overrides
//  6. leading dead digraph
//  7. nengen after every dead consonant
//  8. diacritic rules (codas of any vowel)
//  9. drop the inherent "a" after a base letter
// 10. "a" carrier before a syllable-initial vowel
//
// Nothing here fails: characters no rule knows about are copied through.

mod rules;

use tracing::{debug, debug_span};

use lampungify_core::character::{Digraph, fold_case, is_consonant, is_vowel};
use lampungify_core::glyph::{self, Glyph, Marker};

use crate::lampung::constants::LOANWORD_SUBSTITUTIONS;
use crate::syllabifier::{SyllabifierOptions, syllabify};

use rules::{
    CodaRule, DIACRITIC_RULES, Nucleus, Override, PREFIX_RULES, PrefixRule, SUFFIX_OVERRIDES,
    SUFFIX_RULES,
};

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Encode space-separated text. Words map one-to-one and are rejoined with
/// single spaces.
pub fn transliterate_to_script(text: &str, options: &SyllabifierOptions) -> String {
    text.split(' ')
        .map(|word| encode_word(word, options))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encode one word: the encodings of its syllables, concatenated.
pub fn encode_word(word: &str, options: &SyllabifierOptions) -> String {
    syllabify(word, options)
        .iter()
        .map(|syllable| encode_syllable(syllable))
        .collect()
}

/// Encode a single syllable into marker text.
pub fn encode_syllable(syllable: &str) -> String {
    let _span = debug_span!("encode_syllable", syllable).entered();

    let mut buf = nativize(syllable);
    mark_onset_clusters(&mut buf);
    substitute_letters(&mut buf);

    for rule in PREFIX_RULES {
        apply_prefix_rule(&mut buf, rule);
    }
    for rule in SUFFIX_RULES {
        if !apply_overrides(&mut buf, SUFFIX_OVERRIDES) {
            apply_coda_rule(&mut buf, rule, false);
        }
    }

    mark_leading_digraph(&mut buf);
    mark_dead_consonants(&mut buf);

    for rule in DIACRITIC_RULES {
        apply_coda_rule(&mut buf, rule, true);
    }

    collapse_inherent_vowel(&mut buf);
    add_vowel_carrier(&mut buf);

    let encoded = glyph::render(&buf);
    debug!(%encoded);
    encoded
}

// ---------------------------------------------------------------------------
// Cell predicates
// ---------------------------------------------------------------------------

fn latin_consonant(g: Glyph) -> Option<char> {
    g.latin().filter(|&c| is_consonant(c))
}

/// A vowel that cannot stand on its own and needs the "a" letter under it.
fn needs_carrier(g: Glyph) -> bool {
    match g {
        Glyph::Latin(c) => is_vowel(c) && c != 'a',
        Glyph::Marker(m) => m == Marker::ETaling,
        Glyph::Nengen => false,
    }
}

/// The induk letter a digraph is written with, if it has one.
fn induk_marker(digraph: Digraph) -> Option<Marker> {
    match digraph {
        Digraph::Ng => Some(Marker::Nga),
        Digraph::Ny => Some(Marker::Nya),
        Digraph::Gh => Some(Marker::Gha),
        Digraph::Kh => None,
    }
}

/// Check that `letters` sit as Latin cells at `pos`.
fn latin_run_at(buf: &[Glyph], pos: usize, letters: &[char]) -> bool {
    buf.len() >= pos + letters.len()
        && letters
            .iter()
            .zip(&buf[pos..])
            .all(|(&c, &g)| g.is_latin(c))
}

// ---------------------------------------------------------------------------
// Steps 1-3: normalization
// ---------------------------------------------------------------------------

/// Lowercase and replace loanword letters.
fn nativize(syllable: &str) -> Vec<Glyph> {
    let mut buf = Vec::with_capacity(syllable.len());
    for c in syllable.chars().map(fold_case) {
        match LOANWORD_SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => buf.extend(to.chars().map(Glyph::Latin)),
            None => buf.push(Glyph::Latin(c)),
        }
    }
    buf
}

/// Put a nengen between two consonants of an onset cluster ("pra" -> "p/ra").
/// The consonants of a digraph stay together.
fn mark_onset_clusters(buf: &mut Vec<Glyph>) {
    let mut i = 0;
    while i + 1 < buf.len() {
        let pair = (latin_consonant(buf[i]), latin_consonant(buf[i + 1]));
        if let (Some(first), Some(second)) = pair {
            if Digraph::from_pair(first, second).is_none() && opens_vowel(buf, i + 1) {
                buf.insert(i + 1, Glyph::Nengen);
                i += 2;
                continue;
            }
        }
        i += 1;
    }
}

/// True when the consonant run starting at `pos` ends in a vowel.
fn opens_vowel(buf: &[Glyph], pos: usize) -> bool {
    buf[pos..]
        .iter()
        .find(|&&g| latin_consonant(g).is_none())
        .is_some_and(|g| g.is_vowel())
}

fn substitute_letters(buf: &mut [Glyph]) {
    for cell in buf.iter_mut() {
        match *cell {
            Glyph::Latin('q') => *cell = Glyph::Latin('k'),
            Glyph::Latin('\u{00E9}') => *cell = Glyph::Marker(Marker::ETaling),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// Apply the first override in `overrides` that matches. Returns whether one
/// did, in which case the shadowed general rule is skipped.
fn apply_overrides(buf: &mut Vec<Glyph>, overrides: &[Override]) -> bool {
    overrides.iter().any(|o| apply_override(buf, o))
}

fn apply_override(buf: &mut Vec<Glyph>, o: &Override) -> bool {
    let mut applied = false;
    match *o {
        Override::BareNya { blockers } => {
            let mut i = 0;
            while i < buf.len() {
                // A vowel right after "nya" needs its "a" kept as the carrier.
                let blocked = buf.get(i + 3).is_some_and(|&g| {
                    g.is_vowel() || g.latin().is_some_and(|c| blockers.contains(&c))
                });
                if latin_run_at(buf, i, &['n', 'y', 'a']) && !blocked {
                    buf.splice(i..i + 3, [Glyph::Marker(Marker::Nya)]);
                    applied = true;
                }
                i += 1;
            }
        }
        Override::AfterNya { letters, marker } => {
            let mut i = 0;
            while i < buf.len() {
                if buf[i].is_marker(Marker::Nya) && latin_run_at(buf, i + 1, letters) {
                    buf.splice(i + 1..i + 1 + letters.len(), [Glyph::Marker(marker)]);
                    applied = true;
                }
                i += 1;
            }
        }
    }
    if applied {
        debug!(override_rule = ?o, "override applied");
    }
    applied
}

// ---------------------------------------------------------------------------
// Step 4: prefix rules
// ---------------------------------------------------------------------------

/// Digraph + vowel -> induk marker + vowel.
fn apply_prefix_rule(buf: &mut Vec<Glyph>, rule: &PrefixRule) {
    if apply_overrides(buf, rule.overrides) {
        return;
    }

    let letters = rule.digraph.letters();
    let mut i = 0;
    while i + 2 < buf.len() {
        if latin_run_at(buf, i, &letters) && buf[i + 2].is_vowel() {
            buf.splice(i..i + 2, [Glyph::Marker(rule.marker)]);
        }
        i += 1;
    }
}

// ---------------------------------------------------------------------------
// Steps 5 and 8: coda rules
// ---------------------------------------------------------------------------

impl Nucleus {
    fn admits(self, g: Glyph) -> bool {
        match self {
            Nucleus::A => g.is_latin('a'),
            Nucleus::Any => g.is_vowel(),
        }
    }
}

/// Replace the closing letters after a nucleus with the rule's sign.
///
/// The closing letters must end the syllable's sound: no vowel may follow,
/// and the last letter may not start a digraph with the next one. With
/// `absorb_nengen`, a nengen right after the letters is replaced too.
fn apply_coda_rule(buf: &mut Vec<Glyph>, rule: &CodaRule, absorb_nengen: bool) {
    let mut i = 0;
    while i + 1 < buf.len() {
        if !rule.nucleus.admits(buf[i]) {
            i += 1;
            continue;
        }
        let Some(coda) = rule
            .codas
            .iter()
            .find(|coda| latin_run_at(buf, i + 1, coda))
        else {
            i += 1;
            continue;
        };

        let coda_end = i + 1 + coda.len();
        let last = coda[coda.len() - 1];
        let joins_digraph = buf
            .get(coda_end)
            .and_then(|g| g.latin())
            .is_some_and(|next| Digraph::from_pair(last, next).is_some());

        let mut end = coda_end;
        if absorb_nengen && buf.get(end) == Some(&Glyph::Nengen) {
            end += 1;
        }
        let closes = !buf.get(end).is_some_and(|g| g.is_vowel());

        if closes && !joins_digraph {
            buf.splice(i + 1..end, [Glyph::Marker(rule.marker)]);
            i += 2;
        } else {
            i += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Steps 6-7: nengen placement
// ---------------------------------------------------------------------------

/// A syllable that opens with a digraph and no vowel after it.
///
/// A bare "ng" is the final-ng sign of the previous syllable. Any other
/// leading digraph becomes its induk letter followed by a nengen.
fn mark_leading_digraph(buf: &mut Vec<Glyph>) {
    let (Some(first), Some(second)) = (
        buf.first().and_then(|g| g.latin()),
        buf.get(1).and_then(|g| g.latin()),
    ) else {
        return;
    };
    let Some(digraph) = Digraph::from_pair(first, second) else {
        return;
    };
    if buf.get(2).is_some_and(|g| g.is_vowel()) {
        return;
    }

    let letters_after = buf[2..]
        .iter()
        .any(|&g| matches!(g, Glyph::Marker(_)) || g.latin().is_some_and(char::is_alphabetic));
    if digraph == Digraph::Ng && !letters_after {
        buf.splice(0..2, [Glyph::Marker(Marker::CodaNg)]);
        return;
    }

    let head: Vec<Glyph> = match induk_marker(digraph) {
        Some(marker) => vec![Glyph::Marker(marker)],
        None => digraph.letters().map(Glyph::Latin).to_vec(),
    };
    let head_len = head.len();
    buf.splice(0..2, head);
    if buf.get(head_len) != Some(&Glyph::Nengen) {
        buf.insert(head_len, Glyph::Nengen);
    }
}

/// Put a nengen after every consonant (or digraph) not followed by a vowel,
/// a sign or a nengen. Trailing punctuation stays after the nengen.
///
/// A dead ny or gh is written with its induk letter, as at the start of a
/// syllable. A dead ng stays Latin for the final-ng sign of step 8.
fn mark_dead_consonants(buf: &mut Vec<Glyph>) {
    let mut i = 0;
    while i < buf.len() {
        let Some(c) = latin_consonant(buf[i]) else {
            i += 1;
            continue;
        };

        let digraph = buf
            .get(i + 1)
            .and_then(|&g| latin_consonant(g))
            .and_then(|next| Digraph::from_pair(c, next));
        let last = if digraph.is_some() { i + 1 } else { i };

        let dead = match buf.get(last + 1) {
            None => true,
            Some(&g) => !g.is_vowel() && !matches!(g, Glyph::Nengen | Glyph::Marker(_)),
        };
        if !dead {
            i = last + 1;
            continue;
        }

        match digraph.filter(|&d| d != Digraph::Ng).and_then(induk_marker) {
            Some(marker) => {
                buf.splice(i..=last, [Glyph::Marker(marker), Glyph::Nengen]);
                i += 2;
            }
            None => {
                buf.insert(last + 1, Glyph::Nengen);
                i = last + 2;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Steps 9-10: vowel cleanup
// ---------------------------------------------------------------------------

/// Drop the "a" a base letter already implies.
///
/// An "a" followed by a vowel that needs a carrier is kept: it is that
/// carrier ("kaé" -> "kaE"). The cell after a dropped "a" is never dropped,
/// so the second "a" of "aa" stays as the "a" letter.
fn collapse_inherent_vowel(buf: &mut Vec<Glyph>) {
    let mut i = 1;
    while i < buf.len() {
        let carries_next = buf.get(i + 1).is_some_and(|&g| needs_carrier(g));
        if buf[i].is_latin('a') && buf[i - 1].is_base() && !carries_next {
            buf.remove(i);
        }
        i += 1;
    }
}

/// A syllable opening with a vowel other than "a" needs the "a" letter to
/// carry it.
fn add_vowel_carrier(buf: &mut Vec<Glyph>) {
    if buf.first().is_some_and(|&g| needs_carrier(g)) {
        buf.insert(0, Glyph::Latin('a'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> String {
        transliterate_to_script(s, &SyllabifierOptions::default())
    }

    // -----------------------------------------------------------------------
    // Text and word level
    // -----------------------------------------------------------------------

    #[test]
    fn sentence_sikam_haga_mengan() {
        assert_eq!(text("sikam haga mengan"), "sikm/ hg meGA");
    }

    #[test]
    fn empty_text() {
        assert_eq!(text(""), "");
    }

    #[test]
    fn initial_u_gets_carrier() {
        assert_eq!(text("ulay"), "aulI");
    }

    #[test]
    fn word_count_is_preserved() {
        let out = text("sikam  haga");
        assert_eq!(out.split(' ').count(), 3);
        assert_eq!(out, "sikm/  hg");
    }

    #[test]
    fn deterministic_output() {
        let first = text("nyak haga mengan");
        for _ in 0..5 {
            assert_eq!(text("nyak haga mengan"), first);
        }
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(text("SIKAM"), "sikm/");
    }

    #[test]
    fn detached_ng_becomes_final_ng_sign() {
        assert_eq!(text("kongru"), "koXru");
    }

    #[test]
    fn vowel_less_word_disappears() {
        assert_eq!(text("sikam brr haga"), "sikm/  hg");
    }

    // -----------------------------------------------------------------------
    // Syllable level
    // -----------------------------------------------------------------------

    #[test]
    fn open_syllable_drops_inherent_a() {
        assert_eq!(encode_syllable("ka"), "k");
        assert_eq!(encode_syllable("si"), "si");
    }

    #[test]
    fn closed_syllable_gets_nengen() {
        assert_eq!(encode_syllable("kam"), "km/");
        assert_eq!(encode_syllable("puh"), "pux");
    }

    #[test]
    fn prefix_ng_with_final_n() {
        assert_eq!(encode_syllable("ngan"), "GA");
    }

    #[test]
    fn final_ng_after_other_vowel() {
        assert_eq!(encode_syllable("meng"), "meX");
    }

    #[test]
    fn suffix_signs_after_a() {
        assert_eq!(encode_syllable("bang"), "bX");
        assert_eq!(encode_syllable("sah"), "sx");
        assert_eq!(encode_syllable("bar"), "bR");
        assert_eq!(encode_syllable("lay"), "lI");
        assert_eq!(encode_syllable("kau"), "kW");
    }

    #[test]
    fn diacritic_signs_after_other_vowels() {
        assert_eq!(encode_syllable("min"), "miA");
        assert_eq!(encode_syllable("pih"), "pix");
        assert_eq!(encode_syllable("tur"), "tuR");
    }

    #[test]
    fn bare_nya() {
        assert_eq!(encode_syllable("nyak"), "Nk/");
        assert_eq!(encode_syllable("nya"), "N");
    }

    #[test]
    fn nya_before_blocker_uses_general_rule() {
        assert_eq!(encode_syllable("nyai"), "NI");
        assert_eq!(encode_syllable("nyan"), "NA");
        assert_eq!(encode_syllable("nyang"), "NX");
    }

    #[test]
    fn nya_overrides() {
        assert_eq!(encode_syllable("nyah"), "Nx");
        assert_eq!(encode_syllable("nyar"), "NR");
        assert_eq!(encode_syllable("nyau"), "NW");
    }

    #[test]
    fn gha_prefix() {
        assert_eq!(encode_syllable("gha"), "H");
        assert_eq!(encode_syllable("ghi"), "Hi");
    }

    #[test]
    fn onset_cluster_gets_nengen() {
        assert_eq!(encode_syllable("pra"), "p/r");
        assert_eq!(encode_syllable("stri"), "s/t/ri");
    }

    #[test]
    fn loanword_letters_are_nativized() {
        assert_eq!(encode_syllable("va"), "p");
        assert_eq!(encode_syllable("fa"), "p");
        assert_eq!(encode_syllable("za"), "j");
        assert_eq!(encode_syllable("xi"), "k/si");
        assert_eq!(encode_syllable("qa"), "k");
    }

    #[test]
    fn e_acute_becomes_vowel_sign() {
        assert_eq!(encode_syllable("k\u{00E9}"), "kE");
        assert_eq!(encode_syllable("\u{00E9}"), "aE");
    }

    #[test]
    fn initial_vowels() {
        assert_eq!(encode_syllable("a"), "a");
        assert_eq!(encode_syllable("an"), "aA");
        assert_eq!(encode_syllable("au"), "aW");
        assert_eq!(encode_syllable("i"), "ai");
    }

    #[test]
    fn punctuation_stays_after_nengen() {
        assert_eq!(encode_syllable("kam,"), "km/,");
        assert_eq!(encode_syllable("ga."), "g.");
    }

    #[test]
    fn leading_dead_digraphs() {
        assert_eq!(encode_syllable("ng"), "X");
        assert_eq!(encode_syllable("ny"), "N/");
        assert_eq!(encode_syllable("kh"), "kh/");
        assert_eq!(encode_syllable("ngra"), "G/r");
    }

    #[test]
    fn coda_cluster_gets_nengen_on_each_consonant() {
        assert_eq!(encode_syllable("bank"), "bAk/");
        assert_eq!(encode_syllable("teks"), "tek/s/");
    }

    #[test]
    fn a_before_another_vowel_is_kept_as_carrier() {
        assert_eq!(encode_syllable("ka\u{00E9}"), "kaE");
        assert_eq!(encode_syllable("kao"), "kao");
        assert_eq!(encode_syllable("kaa"), "ka");
    }

    #[test]
    fn vowel_after_nya_keeps_both_vowels() {
        assert_eq!(encode_syllable("nyaa"), "Na");
        assert_eq!(encode_syllable("nyae"), "Nae");
        assert_eq!(encode_syllable("nya\u{00E9}"), "NaE");
        assert_eq!(encode_syllable("nyaan"), "NaA");
    }

    #[test]
    fn dead_ny_and_gh_use_induk_letters() {
        assert_eq!(encode_syllable("nyany"), "NN/");
        assert_eq!(encode_syllable("bagh"), "bH/");
        assert_eq!(text("nyanyi"), "NN/ai");
    }

    #[test]
    fn dead_ng_and_kh_stay_latin() {
        assert_eq!(encode_syllable("meng"), "meX");
        assert_eq!(encode_syllable("bakh"), "bkh/");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(encode_syllable("ka1"), "k1");
    }
}
