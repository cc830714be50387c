//! Letter normalization
//!
//! Folds foreign diacritics and ligatures to plain Spanish letters and
//! strips everything that is neither a letter nor the boundary marker.

use crate::config::Config;
use crate::tables::{self, BOUNDARY_MARKER};

/// Normalize a word for syllabification.
///
/// Returns an empty string when nothing letter-like remains. When
/// `spell_single_letters` is set and exactly one consonant letter remains,
/// the letter is expanded to its spelled-out name.
pub(crate) fn normalize(word: &str, config: &Config) -> String {
    let mut folded = String::with_capacity(word.len());
    for c in word.chars() {
        match tables::fold_foreign(c) {
            Some(plain) => folded.push_str(plain),
            None => folded.push(c),
        }
    }
    let letters: String = folded
        .chars()
        .filter(|&c| c.is_alphabetic() || c == BOUNDARY_MARKER)
        .collect();

    if config.spell_single_letters {
        let mut chars = letters.chars();
        if let (Some(only), None) = (chars.next(), chars.next()) {
            if !tables::is_vowel(only, config.ipa) {
                if let Some(name) = tables::letter_name(only) {
                    return name.to_string();
                }
            }
        }
    }
    letters
}
