// Syllabifier -- splits a Latin-script Lampung word into syllables
//
// The syllabifier works in three passes:
// 1. A greedy scan that cuts the word after each vowel nucleus, its optional
//    trailing digraph and at most one closing consonant
// 2. Boundary repair, which moves digraphs that were attached to the coda of
//    one syllable onto the next when they really open it
// 3. Vowel-pair splitting, which separates two vowels that do not form a
//    diphthong
//
// Segmentation never adds or drops characters: joining the syllables of a
// word gives back the word.

use hashbrown::HashSet;
use tracing::{debug, debug_span};

use lampungify_core::character::{
    Digraph, digraph_at, ends_with_digraph, fold_case, is_consonant, is_vowel,
    starts_with_digraph,
};

use crate::AksaraError;
use crate::lampung::constants::DEFAULT_VOWEL_PAIR_EXCEPTIONS;

// ---------------------------------------------------------------------------
// Syllabifier options
// ---------------------------------------------------------------------------

/// Configuration for the syllabifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabifierOptions {
    /// Vowel pairs kept together as diphthongs (stored lowercase).
    vowel_pair_exceptions: HashSet<[char; 2]>,
}

impl Default for SyllabifierOptions {
    /// Keeps "ai" and "au" together.
    fn default() -> Self {
        Self {
            vowel_pair_exceptions: DEFAULT_VOWEL_PAIR_EXCEPTIONS.iter().copied().collect(),
        }
    }
}

impl SyllabifierOptions {
    /// Build options with a custom set of diphthongs.
    ///
    /// Each entry must be exactly two vowels (case-insensitive, surrounding
    /// whitespace ignored). An empty list splits every flanked vowel pair.
    pub fn with_vowel_pair_exceptions<I, S>(pairs: I) -> Result<Self, AksaraError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vowel_pair_exceptions = pairs
            .into_iter()
            .map(|pair| parse_vowel_pair(pair.as_ref()))
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self {
            vowel_pair_exceptions,
        })
    }

    /// Check whether two vowels are kept together as a diphthong.
    pub fn is_exception(&self, first: char, second: char) -> bool {
        self.vowel_pair_exceptions
            .contains(&[fold_case(first), fold_case(second)])
    }

    /// The configured diphthongs, sorted.
    pub fn vowel_pair_exceptions(&self) -> Vec<String> {
        let mut pairs: Vec<String> = self
            .vowel_pair_exceptions
            .iter()
            .map(|pair| pair.iter().collect())
            .collect();
        pairs.sort();
        pairs
    }
}

fn parse_vowel_pair(pair: &str) -> Result<[char; 2], AksaraError> {
    let chars: Vec<char> = pair.trim().chars().map(fold_case).collect();
    match chars.as_slice() {
        &[first, second] if is_vowel(first) && is_vowel(second) => Ok([first, second]),
        _ => Err(AksaraError::InvalidVowelPair(pair.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Split a single word into syllables.
///
/// The word must not contain spaces. A word without any vowel yields no
/// syllables at all, so consonant-only tokens disappear.
pub fn syllabify(word: &str, options: &SyllabifierOptions) -> Vec<String> {
    let _span = debug_span!("syllabify", word).entered();

    let chars: Vec<char> = word.chars().collect();
    let mut syllables = scan_syllables(&chars);
    repair_boundaries(&mut syllables);

    syllables
        .iter()
        .flat_map(|syllable| split_vowel_pair(syllable, options))
        .map(|part| part.iter().collect())
        .collect()
}

/// Split text on single spaces and syllabify each word.
///
/// The result has one entry per space-separated word, including empty
/// entries for empty words.
pub fn syllabify_text(text: &str, options: &SyllabifierOptions) -> Vec<Vec<String>> {
    text.split(' ').map(|word| syllabify(word, options)).collect()
}

// ---------------------------------------------------------------------------
// Pass 1: greedy scan
// ---------------------------------------------------------------------------

/// Cut the word into raw syllables.
///
/// Each syllable is: any non-vowels, one or more vowels, an optional digraph,
/// then either every remaining non-vowel (when no vowel follows) or a single
/// non-vowel that is itself followed by a non-vowel.
fn scan_syllables(word: &[char]) -> Vec<Vec<char>> {
    let len = word.len();
    let mut syllables = Vec::new();
    let mut start = 0;

    while start < len {
        let mut pos = start;
        while pos < len && !is_vowel(word[pos]) {
            pos += 1;
        }
        if pos == len {
            // No nucleus left; the tail is dropped.
            break;
        }
        while pos < len && is_vowel(word[pos]) {
            pos += 1;
        }
        if digraph_at(word, pos).is_some() {
            pos += 2;
        }

        if word[pos..].iter().all(|&c| !is_vowel(c)) {
            pos = len;
        } else if pos + 1 < len && !is_vowel(word[pos]) && !is_vowel(word[pos + 1]) {
            pos += 1;
        }

        syllables.push(word[start..pos].to_vec());
        start = pos;
    }

    syllables
}

// ---------------------------------------------------------------------------
// Pass 2: boundary repair
// ---------------------------------------------------------------------------

/// Re-attach digraphs to the syllable they open.
///
/// Both checks of one iteration look at the syllable as it was when the
/// iteration started; moves made while handling the previous pair are already
/// visible in it.
fn repair_boundaries(syllables: &mut Vec<Vec<char>>) {
    let mut i = 0;
    while i + 1 < syllables.len() {
        let current = syllables[i].clone();
        let next = syllables[i + 1].clone();

        // "..ng" + consonant: the consonant belongs to the next syllable
        if current.len() > 1
            && has_special_ending(&current[..current.len() - 1], &[Digraph::Ng, Digraph::Ny])
            && next.iter().any(|&c| is_vowel(c))
        {
            debug!(syllable = %current.iter().collect::<String>(), "moving closing consonant forward");
            move_tail(syllables, i, &current, &next, 1);
        }

        if has_special_ending(&current, &Digraph::ALL) && next.first().is_some_and(|&c| is_vowel(c))
        {
            debug!(syllable = %current.iter().collect::<String>(), "moving digraph forward");
            move_tail(syllables, i, &current, &next, 2);
        } else {
            detach_coda_digraph(syllables, i);
        }

        i += 1;
    }
}

/// True when the syllable ends with one of `digraphs` and does not also start
/// with that digraph.
fn has_special_ending(syllable: &[char], digraphs: &[Digraph]) -> bool {
    ends_with_digraph(syllable)
        .is_some_and(|d| digraphs.contains(&d) && starts_with_digraph(syllable) != Some(d))
}

/// Move the last `count` characters of syllable `i` to the front of `i + 1`.
fn move_tail(
    syllables: &mut [Vec<char>],
    i: usize,
    current: &[char],
    next: &[char],
    count: usize,
) {
    let cut = current.len() - count;
    syllables[i] = current[..cut].to_vec();

    let mut joined = current[cut..].to_vec();
    joined.extend_from_slice(next);
    syllables[i + 1] = joined;
}

/// A vowel followed by a digraph, before a syllable that opens with a
/// consonant, leaves the digraph as a syllable of its own ("kongru" ->
/// "ko", "ng", "ru").
fn detach_coda_digraph(syllables: &mut Vec<Vec<char>>, i: usize) {
    let syllable = &syllables[i];
    let len = syllable.len();
    let detachable = len >= 3
        && ends_with_digraph(syllable).is_some()
        && is_vowel(syllable[len - 3])
        && syllables[i + 1].first().is_some_and(|&c| is_consonant(c));
    if !detachable {
        return;
    }

    let digraph = syllables[i].split_off(len - 2);
    debug!(digraph = %digraph.iter().collect::<String>(), "detaching coda digraph");
    syllables.insert(i + 1, digraph);
}

// ---------------------------------------------------------------------------
// Pass 3: vowel-pair splitting
// ---------------------------------------------------------------------------

/// Split a syllable between two vowels that do not form a diphthong.
///
/// The pair must have a non-vowel on both sides. At most one split is made.
fn split_vowel_pair<'a>(syllable: &'a [char], options: &SyllabifierOptions) -> Vec<&'a [char]> {
    let len = syllable.len();
    for pos in 1..len.saturating_sub(2) {
        let flanked = !is_vowel(syllable[pos - 1])
            && is_vowel(syllable[pos])
            && is_vowel(syllable[pos + 1])
            && !is_vowel(syllable[pos + 2]);
        if flanked && !options.is_exception(syllable[pos], syllable[pos + 1]) {
            debug!(syllable = %syllable.iter().collect::<String>(), "splitting vowel pair");
            let (head, tail) = syllable.split_at(pos + 1);
            return vec![head, tail];
        }
    }
    vec![syllable]
}
