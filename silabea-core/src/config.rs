//! Engine configuration

use std::path::PathBuf;

/// How much of the lexical exception list is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExceptionLevel {
    /// No exception rewriting at all
    None,
    /// The basic verb-ending rules (`-uir`/`-uar` hiatus families)
    #[default]
    Basic,
    /// Basic rules plus the fixed set of vacillating-hiatus words
    Extended,
}

impl ExceptionLevel {
    /// Numeric form used by the CLI (`0`, `1`, `2`).
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => ExceptionLevel::None,
            1 => ExceptionLevel::Basic,
            _ => ExceptionLevel::Extended,
        }
    }

    /// Whether any exception rules are applied.
    pub fn enabled(&self) -> bool {
        !matches!(self, ExceptionLevel::None)
    }
}

/// Processing options, fixed for one syllabification request.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Exception rewriting level
    pub exception_level: ExceptionLevel,
    /// Treat the input as IPA symbols (switches the vowel/glide tables)
    pub ipa: bool,
    /// Treat `h` as a full consonant, blocking nucleus grouping across it
    pub treat_h_as_consonant: bool,
    /// Insert a prosthetic vowel before foreign word-initial clusters
    pub apply_epenthesis: bool,
    /// Admit `tl` as an indivisible onset (dialectal variant)
    pub allow_tl_onset: bool,
    /// Expand an isolated consonant letter to its spelled-out name
    pub spell_single_letters: bool,
    /// Load exception rules from this file instead of the embedded list
    pub exceptions_path: Option<PathBuf>,
}

impl Config {
    /// Create a builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Fluent builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the exception level.
    pub fn exception_level(mut self, level: ExceptionLevel) -> Self {
        self.config.exception_level = level;
        self
    }

    /// Treat the input word as IPA symbols.
    pub fn ipa(mut self, ipa: bool) -> Self {
        self.config.ipa = ipa;
        self
    }

    /// Treat `h` as a consonant.
    pub fn treat_h_as_consonant(mut self, yes: bool) -> Self {
        self.config.treat_h_as_consonant = yes;
        self
    }

    /// Apply the epenthesis adjuster.
    pub fn apply_epenthesis(mut self, yes: bool) -> Self {
        self.config.apply_epenthesis = yes;
        self
    }

    /// Admit `tl` as an indivisible onset.
    pub fn allow_tl_onset(mut self, yes: bool) -> Self {
        self.config.allow_tl_onset = yes;
        self
    }

    /// Spell out isolated consonant letters.
    pub fn spell_single_letters(mut self, yes: bool) -> Self {
        self.config.spell_single_letters = yes;
        self
    }

    /// Use a custom exceptions file.
    pub fn exceptions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.exceptions_path = Some(path.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> Config {
        self.config
    }
}
