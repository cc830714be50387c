//! Stress locator
//!
//! Pure function over the final syllable list: orthographic accents win,
//! otherwise the default llana/aguda rule applies.

use crate::config::Config;
use crate::tables;

/// Locate the stressed syllable as a negative offset from the end.
///
/// Returns `None` for an empty syllable list.
pub(crate) fn locate(syllables: &[String], config: &Config) -> Option<i32> {
    if syllables.is_empty() {
        return None;
    }
    let count = syllables.len() as i32;
    if count == 1 {
        return Some(-1);
    }

    // rightmost orthographic accent wins
    for (idx, syllable) in syllables.iter().enumerate().rev() {
        if syllable.chars().any(tables::is_accented_vowel) {
            return Some(idx as i32 - count);
        }
    }

    let letters: Vec<char> = syllables.concat().chars().collect();
    let last = *letters.last().expect("syllables are never empty strings");
    let prev_is_vowel = letters
        .len()
        .checked_sub(2)
        .map(|i| tables::is_vowel(letters[i], config.ipa))
        .unwrap_or(false);

    // final y after a vowel is a semivowel: aguda ("virrey", "estoy")
    if last.to_lowercase().next() == Some('y') && prev_is_vowel {
        return Some(-1);
    }
    if tables::is_vowel(last, config.ipa) {
        return Some(-2);
    }
    if matches!(last.to_lowercase().next(), Some('n') | Some('s')) && prev_is_vowel {
        return Some(-2);
    }
    Some(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate_strs(syllables: &[&str]) -> Option<i32> {
        let owned: Vec<String> = syllables.iter().map(|s| s.to_string()).collect();
        locate(&owned, &Config::default())
    }

    #[test]
    fn single_syllable_is_stressed() {
        assert_eq!(locate_strs(&["sol"]), Some(-1));
    }

    #[test]
    fn empty_list_has_no_stress() {
        assert_eq!(locate_strs(&[]), None);
    }

    #[test]
    fn accent_marks_win() {
        assert_eq!(locate_strs(&["ár", "bol"]), Some(-2));
        assert_eq!(locate_strs(&["can", "ción"]), Some(-1));
        assert_eq!(locate_strs(&["dí", "ga", "me", "lo"]), Some(-4));
    }

    #[test]
    fn vowel_final_words_are_llanas() {
        assert_eq!(locate_strs(&["ca", "sa"]), Some(-2));
    }

    #[test]
    fn n_s_after_vowel_are_llanas() {
        assert_eq!(locate_strs(&["can", "tan"]), Some(-2));
        assert_eq!(locate_strs(&["lu", "nes"]), Some(-2));
    }

    #[test]
    fn other_consonant_finals_are_agudas() {
        assert_eq!(locate_strs(&["re", "loj"]), Some(-1));
        assert_eq!(locate_strs(&["pa", "red"]), Some(-1));
        // final s after a consonant does not pull stress back
        assert_eq!(locate_strs(&["ro", "bots"]), Some(-1));
    }

    #[test]
    fn final_semivowel_y_is_aguda() {
        assert_eq!(locate_strs(&["vi", "rrey"]), Some(-1));
        assert_eq!(locate_strs(&["es", "toy"]), Some(-1));
    }
}
