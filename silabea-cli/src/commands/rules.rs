//! Rules command implementation
//!
//! Prints the active exception rule list, which doubles as a validation
//! pass for custom rule files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use silabea_core::{ExceptionLevel, ExceptionList};

/// Arguments for the rules command
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Load rules from a file instead of the embedded list
    #[arg(long, value_name = "FILE")]
    pub exceptions: Option<PathBuf>,

    /// Include the extended hiatus rules
    #[arg(long)]
    pub extended: bool,
}

impl RulesArgs {
    /// Execute the rules command
    pub fn execute(&self) -> Result<()> {
        let list = match &self.exceptions {
            Some(path) => ExceptionList::from_path(path)
                .with_context(|| format!("failed to load rules from {}", path.display()))?,
            None => {
                let level = if self.extended {
                    ExceptionLevel::Extended
                } else {
                    ExceptionLevel::Basic
                };
                (*ExceptionList::embedded(level).context("failed to load embedded rules")?)
                    .clone()
            }
        };

        for rule in list.rules() {
            println!("{}\t{}", rule.pattern(), rule.replacement());
        }
        log::info!("{} rule(s)", list.len());
        Ok(())
    }
}
