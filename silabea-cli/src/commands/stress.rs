//! Stress command implementation

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::{gather_words, init_logging, EngineOpts};
use crate::output::{JsonFormatter, OutputFormat, TextFormatter};

/// Arguments for the stress command
#[derive(Debug, Args)]
pub struct StressArgs {
    /// Words to analyze (reads whitespace-separated words from stdin when empty)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

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

impl StressArgs {
    /// Execute the stress command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        let analyzer = self.engine.build_analyzer()?;
        let words = gather_words(&self.words)?;
        log::info!("locating stress for {} word(s)", words.len());

        match self.format {
            OutputFormat::Text => {
                let mut formatter = TextFormatter::stdout();
                for word in &words {
                    let stress = analyzer
                        .stress(word)
                        .with_context(|| format!("failed to analyze `{word}`"))?;
                    formatter.stress(stress)?;
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
