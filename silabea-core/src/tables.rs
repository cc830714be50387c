//! Fixed phonological tables
//!
//! All rule data the pipeline consults lives here as immutable constants
//! and small query functions. The cluster lists follow the most complete
//! variant of the rule set; see DESIGN.md for the frozen choices.

/// Sentinel character marking a forced syllable boundary.
///
/// Inserted by the epenthesis stage, exception replacements, and the Latin
/// accentuation rule; consumed by the onset/coda resolver. It survives
/// normalization (it is not stripped with punctuation) and never appears in
/// final output.
pub(crate) const BOUNDARY_MARKER: char = '_';

/// Word-initial clusters that trigger the prosthetic vowel.
///
/// Checked in order, first match wins, so the three-letter cluster comes
/// before its two-letter prefix.
pub(crate) const EPENTHESIS_CLUSTERS: &[&str] =
    &["sch", "sc", "st", "sp", "sf", "sb", "sm", "sn"];

/// Latin inflectional endings that trigger the accentuation rule.
///
/// Ordered longest first so `-ant`/`-unt` are not shadowed by `-at`/`-it`.
pub(crate) const LATIN_SUFFIXES: &[&str] = &["ant", "unt", "um", "em", "at", "it", "am"];

/// Two-letter onset clusters that never split across a syllable boundary.
const INSEPARABLE_ONSETS: &[&str] = &[
    "pl", "bl", "fl", "cl", "kl", "gl", "ll", "pr", "br", "fr", "cr", "kr", "gr", "rr", "dr",
    "tr", "ch", "dh", "rh", "gw",
];

/// Two-letter coda clusters kept together on the preceding syllable.
const INSEPARABLE_CODAS: &[&str] = &["ns", "bs", "ds", "rs", "st", "nd"];

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Vowel test for the configured symbol set.
pub(crate) fn is_vowel(c: char, ipa: bool) -> bool {
    let c = lower(c);
    if ipa {
        matches!(
            c,
            'a' | 'e' | 'i' | 'o' | 'u'
                | 'ə' | 'ɛ' | 'ɔ' | 'æ' | 'ɑ' | 'ɐ' | 'ɪ' | 'ʊ' | 'ø' | 'œ' | 'y'
                | 'j' | 'w'
        )
    } else {
        matches!(
            c,
            'a' | 'e' | 'i' | 'o' | 'u'
                | 'á' | 'é' | 'í' | 'ó' | 'ú'
                | 'ä' | 'ë' | 'ï' | 'ö' | 'ü'
                | 'æ' | 'œ'
        )
    }
}

/// Weak (closed) vowels: the ones that glide inside a diphthong.
pub(crate) fn is_weak_vowel(c: char, ipa: bool) -> bool {
    let c = lower(c);
    if ipa {
        matches!(c, 'i' | 'u' | 'j' | 'w' | 'ɪ' | 'ʊ')
    } else {
        matches!(c, 'i' | 'u')
    }
}

/// Front vowels that attach to a `gu`/`qu`/`gü` glide sequence.
pub(crate) fn attaches_to_glide(c: char) -> bool {
    matches!(lower(c), 'e' | 'i' | 'é' | 'í')
}

/// Accented weak vowels that break a would-be diphthong into hiatus.
pub(crate) fn forces_hiatus(c: char) -> bool {
    matches!(lower(c), 'í' | 'ú')
}

/// Diaeresis marks, which keep the vowel pair together.
pub(crate) fn has_diaeresis(c: char) -> bool {
    matches!(lower(c), 'ä' | 'ë' | 'ï' | 'ö' | 'ü')
}

/// Orthographic accent test, both cases.
pub(crate) fn is_accented_vowel(c: char) -> bool {
    matches!(c, 'á' | 'é' | 'í' | 'ó' | 'ú' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú')
}

/// Acute-accented form of a plain lowercase vowel.
pub(crate) fn accented(c: char) -> Option<char> {
    match c {
        'a' => Some('á'),
        'e' => Some('é'),
        'i' => Some('í'),
        'o' => Some('ó'),
        'u' => Some('ú'),
        _ => None,
    }
}

/// Foreign diacritics and ligatures folded to plain Spanish letters.
pub(crate) fn fold_foreign(c: char) -> Option<&'static str> {
    match c {
        'à' => Some("a"),
        'è' => Some("e"),
        'ì' => Some("i"),
        'ò' => Some("o"),
        'ù' => Some("u"),
        'ã' => Some("a"),
        'ẽ' => Some("e"),
        'ĩ' => Some("i"),
        'õ' => Some("o"),
        'ũ' => Some("u"),
        'À' => Some("A"),
        'È' => Some("E"),
        'Ì' => Some("I"),
        'Ò' => Some("O"),
        'Ù' => Some("U"),
        'Ã' => Some("A"),
        'Õ' => Some("O"),
        'ﬁ' => Some("fi"),
        'ﬂ' => Some("fl"),
        _ => None,
    }
}

/// Spelled-out name of an isolated consonant letter.
pub(crate) fn letter_name(c: char) -> Option<&'static str> {
    match lower(c) {
        'b' => Some("be"),
        'c' => Some("ce"),
        'd' => Some("de"),
        'f' => Some("efe"),
        'g' => Some("ge"),
        'h' => Some("hache"),
        'j' => Some("jota"),
        'k' => Some("ka"),
        'l' => Some("ele"),
        'm' => Some("eme"),
        'n' => Some("ene"),
        'ñ' => Some("eñe"),
        'p' => Some("pe"),
        'q' => Some("cu"),
        'r' => Some("erre"),
        's' => Some("ese"),
        't' => Some("te"),
        'v' => Some("uve"),
        'w' => Some("uvedoble"),
        'x' => Some("equis"),
        'y' => Some("ye"),
        'z' => Some("zeta"),
        _ => None,
    }
}

/// Whether a two-character cluster is an unbreakable onset.
pub(crate) fn is_indivisible_onset(cluster: &str, allow_tl: bool) -> bool {
    let folded: String = cluster.chars().map(lower).collect();
    INSEPARABLE_ONSETS.contains(&folded.as_str()) || (allow_tl && folded == "tl")
}

/// Whether a two-character cluster is an unbreakable coda.
pub(crate) fn is_indivisible_coda(cluster: &str) -> bool {
    let folded: String = cluster.chars().map(lower).collect();
    INSEPARABLE_CODAS.contains(&folded.as_str())
}

/// Sonority tie-break: with `prev` then `last` closing the pending
/// cluster, the final consonant alone becomes the next onset.
pub(crate) fn detaches_final_consonant(prev: char, last: char) -> bool {
    let (p, l) = (lower(prev), lower(last));
    (matches!(l, 'd' | 'f' | 'k' | 't')
        && matches!(
            p,
            'b' | 'c' | 'd' | 'f' | 'g' | 'j' | 'k' | 'm' | 'ñ' | 'p' | 'q' | 's' | 't' | 'v'
                | 'w' | 'x' | 'z'
        ))
        || (l == 'g' && matches!(p, 'c' | 't' | 'j' | 'k'))
        || (matches!(l, 'l' | 'm') && matches!(p, 'm' | 'l'))
        || (l == 'c' && p == 'c')
}

/// Consonant digraphs merged into one opaque unit before joining.
pub(crate) fn is_digraph(a: char, b: char) -> bool {
    matches!(
        (lower(a), lower(b)),
        ('l', 'l') | ('r', 'r') | ('c', 'h')
    )
}
