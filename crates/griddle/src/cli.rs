//! The command-line surface of the griddle binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Interactive console for browsing tabular datasets.
///
/// With no flags, griddle serves its built-in sample datasets and reads
/// commands from stdin. Point it at a directory of CSV files with
/// `--data-dir`, or run it non-interactively with repeated `-c` lines.
#[derive(Debug, Parser)]
#[command(name = "griddle", version, about)]
pub struct Cli {
    /// Serve CSV files from this directory instead of the built-in datasets
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// How replies are written out
    #[arg(long, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Run a command line non-interactively, then exit (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Debug logging (equivalent to RUST_LOG=griddle=debug)
    #[arg(long)]
    pub debug: bool,
}

/// Reply output modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// TTY gets styled text, pipes get plain text
    Auto,
    /// Always styled text
    Term,
    /// Always plain text
    Text,
    /// One JSON document per reply
    Json,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Auto => write!(f, "auto"),
            OutputMode::Term => write!(f, "term"),
            OutputMode::Text => write!(f, "text"),
            OutputMode::Json => write!(f, "json"),
        }
    }
}

impl OutputMode {
    /// Resolves `Auto` to `Term` or `Text` by stdout TTY detection.
    ///
    /// The other modes pass through unchanged.
    pub fn resolve(self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if atty::is(atty::Stream::Stdout) {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => other,
        }
    }
}
