//! The syllabification pipeline
//!
//! Stages run in a fixed order per word: epenthesis, exception rewriting,
//! the Latin accentuation rule, then the unconditional core of
//! normalization, nucleus grouping, and onset/coda resolution. Stress
//! location is a pure function over the result.

pub(crate) mod epenthesis;
pub(crate) mod join;
pub(crate) mod latin;
pub(crate) mod normalize;
pub(crate) mod split;
pub(crate) mod stress;

use crate::config::Config;
use crate::exceptions::ExceptionList;

/// Run the full pipeline for one word.
pub(crate) fn syllabify_word(
    word: &str,
    config: &Config,
    exceptions: Option<&ExceptionList>,
) -> Vec<String> {
    let mut current = word.to_string();
    if config.apply_epenthesis {
        current = epenthesis::adjust(&current);
    }
    if let Some(rules) = exceptions {
        current = rules.apply(&current);
    }
    if let Some(syllables) = latin::apply(&current, config) {
        return syllables;
    }
    let normalized = normalize::normalize(&current, config);
    join::join(split::split(&normalized, config), config)
}

pub(crate) use stress::locate as locate_stress;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_compose_in_order() {
        let config = Config::builder().apply_epenthesis(true).build();
        // epenthesis feeds the core: the marker it inserts forces the
        // prosthetic syllable boundary
        let syllables = syllabify_word("stress", &config, None);
        assert_eq!(syllables, vec!["es", "tress"]);
    }

    #[test]
    fn core_runs_without_optional_stages() {
        let config = Config::default();
        assert_eq!(
            syllabify_word("ventana", &config, None),
            vec!["ven", "ta", "na"]
        );
    }
}
