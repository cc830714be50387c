//! Latin accentuation rule
//!
//! Words with Latin inflectional endings and no accent mark get their
//! implied stress mark inserted, by syllabifying a provisionally marked
//! form and accenting the computed syllable. The nested pipeline run is
//! the only recursion in the engine and is capped at this single call.

use crate::config::Config;
use crate::pipeline::{join, normalize, split};
use crate::tables::{self, BOUNDARY_MARKER, LATIN_SUFFIXES};

/// Apply the Latin accentuation rule.
///
/// Returns the finished syllable list when the rule fires, short-circuiting
/// the ordinary split/join stages; `None` otherwise.
pub(crate) fn apply(word: &str, config: &Config) -> Option<Vec<String>> {
    if config.ipa || word.is_empty() {
        return None;
    }
    if word.chars().any(tables::is_accented_vowel) {
        return None;
    }
    let lowered = word.to_lowercase();
    let suffix = LATIN_SUFFIXES.iter().find(|s| lowered.ends_with(**s))?;

    // mark the suffix boundary, fold the Latin diphthongs to single units
    let stem = &lowered[..lowered.len() - suffix.len()];
    let marked = format!("{stem}{BOUNDARY_MARKER}{suffix}");
    let folded = marked.replace("ae", "æ").replace("oe", "œ");

    let normalized = normalize::normalize(&folded, config);
    let mut syllables = join::join(split::split(&normalized, config), config);
    for syllable in &mut syllables {
        if syllable.contains('æ') || syllable.contains('œ') {
            *syllable = syllable.replace('æ', "ae").replace('œ', "oe");
        }
    }
    if syllables.len() < 2 {
        return Some(syllables);
    }

    let penult = syllables.len() - 2;
    let target = if needs_antepenult(&syllables[penult]) && penult > 0 {
        penult - 1
    } else {
        penult
    };
    accent_first_vowel(&mut syllables[target]);
    Some(syllables)
}

/// The penultimate cannot carry the accent when it holds a diphthong
/// (more than one vowel letter) or does not end in a vowel.
fn needs_antepenult(syllable: &str) -> bool {
    let vowels = syllable
        .chars()
        .filter(|&c| tables::is_vowel(c, false))
        .count();
    let open = syllable
        .chars()
        .last()
        .map(|c| tables::is_vowel(c, false))
        .unwrap_or(false);
    vowels > 1 || !open
}

/// Accent one vowel of the syllable, scanning in a/e/i/o/u priority order.
fn accent_first_vowel(syllable: &mut String) {
    for vowel in ['a', 'e', 'i', 'o', 'u'] {
        if let Some(pos) = syllable.chars().position(|c| c == vowel) {
            *syllable = syllable
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if i == pos {
                        tables::accented(c).unwrap_or(c)
                    } else {
                        c
                    }
                })
                .collect();
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin(word: &str) -> Option<Vec<String>> {
        apply(word, &Config::default())
    }

    #[test]
    fn antepenult_when_penult_is_closed() {
        assert_eq!(latin("dominum"), Some(vec!["dó".into(), "min".into(), "um".into()]));
    }

    #[test]
    fn penult_keeps_accent_in_two_syllable_words() {
        assert_eq!(latin("rosam"), Some(vec!["rós".into(), "am".into()]));
        assert_eq!(latin("item"), Some(vec!["ít".into(), "em".into()]));
    }

    #[test]
    fn ae_is_not_a_trigger_suffix() {
        assert!(latin("rosae").is_none());
    }

    #[test]
    fn ae_folding_inside_triggered_words() {
        // the ae nucleus survives syllabification as one unit, and the
        // suffix marker closes the stem syllable
        let syllables = latin("caelum").unwrap();
        assert_eq!(syllables, vec!["cáel".to_string(), "um".to_string()]);
    }

    #[test]
    fn accented_words_are_left_alone() {
        assert_eq!(latin("álbum"), None);
    }

    #[test]
    fn non_latin_endings_are_left_alone() {
        assert_eq!(latin("casa"), None);
        assert_eq!(latin("reloj"), None);
    }

    #[test]
    fn single_syllable_results_are_unchanged() {
        assert_eq!(latin("sum"), Some(vec!["sum".to_string()]));
    }
}
