// Decoder -- aksara marker text back to Latin
//
// The decoder is flat: it does not syllabify, it walks the parsed glyphs and
// applies three passes in order:
// 1. Induk restoration: the "a" carrier before a vowel is dropped, and every
//    base letter left without a vowel gets its inherent "a" back
// 2. Anak huruf restoration: signs expand to their Latin spelling, nengen
//    disappears
// 3. Script punctuation is stripped
//
// It is best effort. Decoding the encoder's output does not always give the
// original text back: kh gains an inherent "a" after its k, and uppercase
// Latin letters that share a marker symbol read as that marker.

use tracing::debug_span;

use lampungify_core::character::is_punctuation;
use lampungify_core::glyph::{self, Glyph};

/// Decode marker text into Latin text.
pub fn transliterate_to_latin(marker_text: &str) -> String {
    let _span = debug_span!("transliterate_to_latin", len = marker_text.len()).entered();

    let mut glyphs = glyph::parse(marker_text);
    drop_vowel_carriers(&mut glyphs);
    restore_inherent_vowels(&mut glyphs);

    expand(&glyphs)
        .chars()
        .filter(|&c| !is_punctuation(c))
        .collect()
}

/// An "a" that does not follow a base letter and carries a vowel is only a
/// carrier. The vowel it carries is what gets read.
fn drop_vowel_carriers(glyphs: &mut Vec<Glyph>) {
    let mut i = 0;
    while i < glyphs.len() {
        let carrier = glyphs[i].is_latin('a')
            && (i == 0 || !glyphs[i - 1].is_base())
            && glyphs.get(i + 1).is_some_and(|g| g.is_vowel());
        if carrier {
            glyphs.remove(i);
        } else {
            i += 1;
        }
    }
}

/// Give back the "a" that a base letter implies when nothing else follows it.
fn restore_inherent_vowels(glyphs: &mut Vec<Glyph>) {
    let mut i = 0;
    while i < glyphs.len() {
        if glyphs[i].is_base() {
            let silent = glyphs
                .get(i + 1)
                .is_some_and(|&g| g.is_vowel() || g == Glyph::Nengen);
            if !silent {
                glyphs.insert(i + 1, Glyph::Latin('a'));
                i += 1;
            }
        }
        i += 1;
    }
}

fn expand(glyphs: &[Glyph]) -> String {
    let mut out = String::with_capacity(glyphs.len() * 2);
    for g in glyphs {
        match *g {
            Glyph::Latin(c) => out.push(c),
            Glyph::Marker(m) => out.push_str(m.latin()),
            Glyph::Nengen => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_sentence() {
        assert_eq!(transliterate_to_latin("sikm/ hg meGA"), "sikam haga mengan");
    }

    #[test]
    fn decode_empty() {
        assert_eq!(transliterate_to_latin(""), "");
    }

    #[test]
    fn carrier_before_vowel_is_dropped() {
        assert_eq!(transliterate_to_latin("aulI"), "ulai");
        assert_eq!(transliterate_to_latin("aE"), "\u{00E9}");
        assert_eq!(transliterate_to_latin("aW"), "au");
    }

    #[test]
    fn carrier_before_coda_sign_is_kept() {
        assert_eq!(transliterate_to_latin("aA"), "an");
        assert_eq!(transliterate_to_latin("a"), "a");
    }

    #[test]
    fn inherent_vowel_before_signs() {
        assert_eq!(transliterate_to_latin("bX"), "bang");
        assert_eq!(transliterate_to_latin("koXru"), "kongru");
        assert_eq!(transliterate_to_latin("Nk/"), "nyak");
        assert_eq!(transliterate_to_latin("Hi"), "ghi");
    }

    #[test]
    fn a_after_base_carries_the_next_vowel() {
        assert_eq!(transliterate_to_latin("kaE"), "ka\u{00E9}");
        assert_eq!(transliterate_to_latin("kao"), "kao");
    }

    #[test]
    fn dead_induk_letters() {
        assert_eq!(transliterate_to_latin("NN/ai"), "nyanyi");
        assert_eq!(transliterate_to_latin("bH/"), "bagh");
    }

    #[test]
    fn nengen_kills_the_inherent_vowel() {
        assert_eq!(transliterate_to_latin("p/r"), "pra");
        assert_eq!(transliterate_to_latin("tek/s/"), "teks");
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(transliterate_to_latin("km/, hg."), "kam haga");
        assert_eq!(transliterate_to_latin("(hg)!"), "haga");
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(transliterate_to_latin("k1"), "ka1");
    }

    #[test]
    fn kh_is_not_recovered() {
        assert_eq!(transliterate_to_latin("kh/"), "kah");
    }
}
