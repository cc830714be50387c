//! Syllabify command implementation

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::{gather_words, init_logging, EngineOpts};
use crate::output::{JsonFormatter, OutputFormat, TextFormatter};

/// Arguments for the syllabify command
#[derive(Debug, Args)]
pub struct SyllabifyArgs {
    /// Words to analyze (reads whitespace-separated words from stdin when empty)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Separator between syllables in text output
    #[arg(short, long, default_value = "-")]
    pub separator: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub engine: EngineOpts,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SyllabifyArgs {
    /// Execute the syllabify command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        let analyzer = self.engine.build_analyzer()?;
        let words = gather_words(&self.words)?;
        log::info!("syllabifying {} word(s)", words.len());

        match self.format {
            OutputFormat::Text => {
                let mut formatter = TextFormatter::stdout();
                for word in &words {
                    let analysis = analyzer
                        .analyze(word)
                        .with_context(|| format!("failed to analyze `{word}`"))?;
                    formatter.syllables(&analysis, &self.separator)?;
                }
                formatter.finish()
            }
            OutputFormat::Json => {
                let mut formatter = JsonFormatter::stdout();
                for word in &words {
                    let analysis = analyzer
                        .analyze(word)
                        .with_context(|| format!("failed to analyze `{word}`"))?;
                    formatter.record(analysis);
                }
                formatter.finish()
            }
        }
    }
}
