//! Nucleus grouper
//!
//! Scans the normalized letter sequence and merges the vowels that share a
//! syllable nucleus (diphthongs, triphthongs, glide sequences) into single
//! units. Consonant digraphs become opaque units so they never split
//! downstream. Everything else stays a single-character unit.

use crate::config::Config;
use crate::tables::{self, BOUNDARY_MARKER};

/// Split a normalized word into letter units.
pub(crate) fn split(word: &str, config: &Config) -> Vec<String> {
    let ipa = config.ipa;
    let mut units: Vec<String> = Vec::new();
    let mut text = String::with_capacity(word.len());

    for c in word.chars() {
        let Some(last) = units.last() else {
            units.push(c.to_string());
            text.push(c);
            continue;
        };
        let last_char = last.chars().last().unwrap();

        if !ipa
            && last.chars().count() == 1
            && last_char != BOUNDARY_MARKER
            && !tables::is_vowel(last_char, ipa)
            && tables::is_digraph(last_char, c)
        {
            units.last_mut().unwrap().push(c);
        } else if c != BOUNDARY_MARKER && tables::is_vowel(c, ipa) {
            if last_char != BOUNDARY_MARKER && tables::is_vowel(last_char, ipa) {
                if merges_into_nucleus(&text, last_char, c, ipa) {
                    units.last_mut().unwrap().push(c);
                } else {
                    units.push(c.to_string());
                }
            } else if absorbs_silent_h(&units, c, config) {
                let h = units.pop().unwrap();
                let mut nucleus = units.pop().unwrap();
                nucleus.push_str(&h);
                nucleus.push(c);
                units.push(nucleus);
            } else {
                units.push(c.to_string());
            }
        } else {
            units.push(c.to_string());
        }
        text.push(c);
    }
    units
}

/// Whether `c` joins the nucleus that currently ends in `prev`.
///
/// `text` is the word consumed so far, used for the `gu`/`qu`/`gü` glide
/// test: there the `u` is silent, so a following front vowel always
/// attaches.
fn merges_into_nucleus(text: &str, prev: char, c: char, ipa: bool) -> bool {
    if !ipa && tables::attaches_to_glide(c) && ends_with_glide(text) {
        return true;
    }
    if tables::is_weak_vowel(prev, ipa) || tables::is_weak_vowel(c, ipa) {
        if !tables::forces_hiatus(prev) && !tables::forces_hiatus(c) {
            return true;
        }
        // an accented weak vowel still glides after u/i: "huí", "jesuíta"
        if tables::forces_hiatus(c) && matches!(prev.to_lowercase().next(), Some('u') | Some('i'))
        {
            return true;
        }
        if tables::has_diaeresis(prev) || tables::has_diaeresis(c) {
            return true;
        }
        return false;
    }
    // two strong vowels: hiatus
    false
}

fn ends_with_glide(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.ends_with("gü") || lowered.ends_with("qu") || lowered.ends_with("gu")
}

/// Silent `h` between diphthong-compatible vowels is absorbed into the
/// nucleus ("ahumar" -> "ahu"), unless `h` is configured as a consonant.
fn absorbs_silent_h(units: &[String], c: char, config: &Config) -> bool {
    if config.ipa || config.treat_h_as_consonant {
        return false;
    }
    let n = units.len();
    if n < 2 || !units[n - 1].eq_ignore_ascii_case("h") {
        return false;
    }
    let Some(prev) = units[n - 2].chars().last() else {
        return false;
    };
    if !tables::is_vowel(prev, false) {
        return false;
    }
    // reuse the vowel-pair decision as if the h were not there
    let before_h: String = units[..n - 1].concat();
    merges_into_nucleus(&before_h, prev, c, false)
}
