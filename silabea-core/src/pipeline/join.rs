//! Onset/coda resolver
//!
//! Walks the unit sequence left to right with one pending consonant
//! buffer, deciding per nucleus how much of the buffer closes the previous
//! syllable and how much opens the new one.

use crate::config::Config;
use crate::tables::{self, BOUNDARY_MARKER};

/// Join letter units into syllables.
pub(crate) fn join(units: Vec<String>, config: &Config) -> Vec<String> {
    let mut syllables: Vec<String> = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for unit in units {
        if unit.chars().all(|c| c == BOUNDARY_MARKER) {
            flush(&mut syllables, &mut pending);
            continue;
        }
        if unit.chars().all(|c| !tables::is_vowel(c, config.ipa)) {
            pending.push(unit);
            continue;
        }
        attach_nucleus(&mut syllables, &mut pending, &unit, config);
    }

    if !pending.is_empty() {
        let tail = pending.concat();
        match syllables.last_mut() {
            Some(last) => last.push_str(&tail),
            // no nucleus anywhere: the whole word is one syllable
            None => syllables.push(tail),
        }
    }
    syllables
}

/// A forced boundary: the buffer closes the previous syllable outright.
fn flush(syllables: &mut [String], pending: &mut Vec<String>) {
    if let Some(last) = syllables.last_mut() {
        last.push_str(&pending.concat());
        pending.clear();
    }
    // a word-initial marker leaves the buffer as the next onset
}

fn attach_nucleus(
    syllables: &mut Vec<String>,
    pending: &mut Vec<String>,
    nucleus: &str,
    config: &Config,
) {
    let buffered: usize = pending.iter().map(|u| u.chars().count()).sum();

    if syllables.is_empty() || buffered <= 1 {
        syllables.push(pending.concat() + nucleus);
        pending.clear();
        return;
    }

    // indivisible onset at the buffer tail: "tr", "ch", "rr", ...
    if let Some((at, cluster)) = tail_pair(pending) {
        if tables::is_indivisible_onset(&cluster, config.allow_tl_onset) {
            split_buffer(syllables, pending, at, nucleus);
            return;
        }
    }

    // indivisible coda at the buffer head: "ns", "bs", ... with more behind
    if buffered > 2 {
        if let Some((at, cluster)) = head_pair(pending) {
            if tables::is_indivisible_coda(&cluster) {
                split_buffer(syllables, pending, at, nucleus);
                return;
            }
        }
    }

    // sonority tie-break: only the final consonant opens the new syllable
    if let Some((at, cluster)) = tail_pair(pending) {
        if at == pending.len() - 2 {
            let mut pair = cluster.chars();
            let (prev, last) = (pair.next().unwrap(), pair.next().unwrap());
            if tables::detaches_final_consonant(prev, last) {
                let at = pending.len() - 1;
                split_buffer(syllables, pending, at, nucleus);
                return;
            }
        }
    }

    // fallback: split at the character midpoint, on a unit boundary
    let mid = buffered / 2;
    let mut seen = 0usize;
    let mut at = pending.len();
    for (i, unit) in pending.iter().enumerate() {
        if seen >= mid {
            at = i;
            break;
        }
        seen += unit.chars().count();
    }
    split_buffer(syllables, pending, at, nucleus);
}

/// Close the previous syllable with `pending[..at]` and open a new one
/// with `pending[at..]` plus the nucleus.
fn split_buffer(
    syllables: &mut Vec<String>,
    pending: &mut Vec<String>,
    at: usize,
    nucleus: &str,
) {
    let coda = pending[..at].concat();
    let onset = pending[at..].concat();
    if let Some(last) = syllables.last_mut() {
        last.push_str(&coda);
    }
    syllables.push(onset + nucleus);
    pending.clear();
}

/// The last two buffer characters, when they sit on unit boundaries:
/// either the final digraph unit, or two trailing single-letter units.
/// Returns the unit index where the pair starts.
fn tail_pair(pending: &[String]) -> Option<(usize, String)> {
    let n = pending.len();
    let last = &pending[n - 1];
    if last.chars().count() == 2 {
        return Some((n - 1, last.clone()));
    }
    if n >= 2 && pending[n - 2].chars().count() == 1 && last.chars().count() == 1 {
        return Some((n - 2, format!("{}{}", pending[n - 2], last)));
    }
    None
}

/// The first two buffer characters, unit-aligned, with the unit index
/// just past the pair.
fn head_pair(pending: &[String]) -> Option<(usize, String)> {
    let first = &pending[0];
    if first.chars().count() == 2 {
        return Some((1, first.clone()));
    }
    if pending.len() >= 2 && pending[1].chars().count() == 1 {
        return Some((2, format!("{}{}", pending[0], pending[1])));
    }
    None
}
