//! CLI command implementations

use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use silabea_core::{Config, ExceptionLevel, Syllabifier};

use crate::error::CliError;

pub mod rules;
pub mod stress;
pub mod syllabify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Divide words into syllables
    Syllabify(syllabify::SyllabifyArgs),

    /// Locate the stressed syllable of words
    Stress(stress::StressArgs),

    /// Print the active exception rule list
    Rules(rules::RulesArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Syllabify(args) => args.execute(),
            Commands::Stress(args) => args.execute(),
            Commands::Rules(args) => args.execute(),
        }
    }
}

/// Engine options shared by the analysis commands
#[derive(Debug, Args)]
pub struct EngineOpts {
    /// Exception level: 0 none, 1 basic, 2 extended
    #[arg(long, value_name = "LEVEL", default_value_t = 1)]
    pub exception_level: u8,

    /// Load exception rules from a file instead of the embedded list
    #[arg(long, value_name = "FILE")]
    pub exceptions: Option<PathBuf>,

    /// Treat the input as IPA symbols
    #[arg(long)]
    pub ipa: bool,

    /// Treat h as a full consonant
    #[arg(long = "h-consonant")]
    pub h_consonant: bool,

    /// Insert a prosthetic vowel before foreign initial clusters
    #[arg(long)]
    pub epenthesis: bool,

    /// Admit tl as an indivisible onset
    #[arg(long = "tl")]
    pub tl_onset: bool,

    /// Spell out an isolated consonant letter as its letter name
    #[arg(long)]
    pub spell_letters: bool,
}

impl EngineOpts {
    /// Build the engine configuration from the flags.
    pub fn to_config(&self) -> Config {
        let mut builder = Config::builder()
            .exception_level(ExceptionLevel::from_u8(self.exception_level))
            .ipa(self.ipa)
            .treat_h_as_consonant(self.h_consonant)
            .apply_epenthesis(self.epenthesis)
            .allow_tl_onset(self.tl_onset)
            .spell_single_letters(self.spell_letters);
        if let Some(path) = &self.exceptions {
            builder = builder.exceptions_path(path);
        }
        builder.build()
    }

    /// Build the analyzer, surfacing resource errors with context.
    pub fn build_analyzer(&self) -> Result<Syllabifier> {
        use anyhow::Context;
        Syllabifier::with_config(self.to_config()).context("failed to initialize the engine")
    }
}

/// Words from the command line, or whitespace-separated words from stdin
/// when none were given.
pub(crate) fn gather_words(args: &[String]) -> Result<Vec<String>> {
    let words: Vec<String> = if args.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.split_whitespace().map(str::to_string).collect()
    } else {
        args.to_vec()
    };
    if words.is_empty() {
        return Err(CliError::NoInput.into());
    }
    Ok(words)
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
