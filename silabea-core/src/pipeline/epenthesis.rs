//! Epenthesis adjuster
//!
//! Inserts a prosthetic vowel before foreign word-initial clusters so
//! loanwords like "sprite" or "schneider" syllabify the way a Spanish
//! speaker pronounces them.

use crate::tables::{self, BOUNDARY_MARKER, EPENTHESIS_CLUSTERS};

/// Prepend the prosthetic vowel when the word starts with a triggering
/// cluster. Only the first matching cluster applies, once.
///
/// When the cluster is followed by a vowel or a liquid, the cluster-initial
/// `s` closes the prosthetic syllable (`sprite` -> `es_prite`); otherwise
/// the whole cluster does (`schneider` -> `esch_neider`).
pub(crate) fn adjust(word: &str) -> String {
    let lowered = word.to_lowercase();
    for cluster in EPENTHESIS_CLUSTERS {
        if !lowered.starts_with(cluster) {
            continue;
        }
        // cluster letters are ASCII, so byte length equals char count
        let head = &word[..cluster.len()];
        let rest = &word[cluster.len()..];
        let liquid_or_vowel = rest
            .chars()
            .next()
            .map(|c| tables::is_vowel(c, false) || matches!(c.to_ascii_lowercase(), 'r' | 'l'))
            .unwrap_or(false);

        let mut adjusted = String::with_capacity(word.len() + 2);
        adjusted.push('e');
        if liquid_or_vowel {
            let mut head_chars = head.chars();
            if let Some(sibilant) = head_chars.next() {
                adjusted.push(sibilant);
            }
            adjusted.push(BOUNDARY_MARKER);
            adjusted.extend(head_chars);
        } else {
            adjusted.push_str(head);
            adjusted.push(BOUNDARY_MARKER);
        }
        adjusted.push_str(rest);
        return adjusted;
    }
    word.to_string()
}
