//! Command-line entry point for silabea

use clap::Parser;
use silabea_cli::commands::Commands;

/// Spanish syllabification and stress analysis
#[derive(Debug, Parser)]
#[command(name = "silabea", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
