//! Silabea CLI library
//!
//! This library provides the command-line interface for the silabea
//! Spanish syllabification engine.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
