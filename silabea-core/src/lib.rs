//! Rule-based Spanish syllabification and stress analysis
//!
//! This crate divides a single orthographic word (Spanish, with
//! Latin-word support) into syllables and locates its stressed syllable.
//! The engine is a deterministic pipeline: epenthesis adjustment, lexical
//! exception rewriting, Latin accentuation, letter normalization, nucleus
//! grouping, and onset/coda resolution, followed by a pure stress rule.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod exceptions;

mod pipeline;
mod tables;

use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder, ExceptionLevel};
pub use error::{CoreError, Result};
pub use exceptions::{ExceptionList, ExceptionRule};

/// Main entry point for syllabification and stress analysis.
///
/// Holds the immutable exception rule list and the processing options;
/// safe to share across threads and reuse for many words.
#[derive(Debug, Clone)]
pub struct Syllabifier {
    config: Config,
    exceptions: Option<Arc<ExceptionList>>,
}

/// One analyzed word: its syllables and stressed-syllable index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    /// The word as supplied by the caller
    pub word: String,
    /// The syllables, first to last
    pub syllables: Vec<String>,
    /// Stressed syllable as a negative offset from the end, `None` when
    /// nothing remained of the input after normalization
    pub stress: Option<i32>,
}

impl Syllabifier {
    /// Create an analyzer with the default configuration (basic
    /// exceptions, orthographic input).
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with a specific configuration.
    ///
    /// The exception resource is loaded and validated here, once; a
    /// malformed or unreadable resource fails fast.
    pub fn with_config(config: Config) -> Result<Self> {
        let exceptions = if config.exception_level.enabled() {
            let list = match &config.exceptions_path {
                Some(path) => Arc::new(ExceptionList::from_path(path)?),
                None => ExceptionList::embedded(config.exception_level)?,
            };
            Some(list)
        } else {
            None
        };
        Ok(Self { config, exceptions })
    }

    /// Divide a word into syllables.
    ///
    /// An input with no letters yields an empty list.
    pub fn syllabify(&self, word: &str) -> Result<Vec<String>> {
        Ok(pipeline::syllabify_word(
            word,
            &self.config,
            self.exceptions.as_deref(),
        ))
    }

    /// Locate the stressed syllable as a negative offset from the end
    /// (`-1` is the last syllable).
    pub fn stress(&self, word: &str) -> Result<i32> {
        let syllables = self.syllabify(word)?;
        pipeline::locate_stress(&syllables, &self.config).ok_or(CoreError::EmptyInput)
    }

    /// Syllabify and locate stress in one pipeline run.
    pub fn analyze(&self, word: &str) -> Result<Analysis> {
        let syllables = self.syllabify(word)?;
        let stress = pipeline::locate_stress(&syllables, &self.config);
        Ok(Analysis {
            word: word.to_string(),
            syllables,
            stress,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The active exception rules, if any.
    pub fn exception_rules(&self) -> Option<&ExceptionList> {
        self.exceptions.as_deref()
    }
}

// Convenience functions

/// Syllabify a word with the default configuration.
pub fn syllabify(word: &str) -> Result<Vec<String>> {
    Syllabifier::new()?.syllabify(word)
}

/// Locate the stressed syllable of a word with the default configuration.
pub fn stress(word: &str) -> Result<i32> {
    Syllabifier::new()?.stress(word)
}
