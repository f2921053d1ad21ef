//! griddle entry point.

use std::io;

use anyhow::Result;
use clap::Parser;
use griddle_dispatch::{DataSource, Dispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use griddle::cli::Cli;
use griddle::fixtures::sample_datasets;
use griddle::repl::Console;
use griddle::source::CsvDirSource;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("griddle=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("griddle=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!("griddle starting with args: {:?}", cli);

    let source: Box<dyn DataSource> = match &cli.data_dir {
        Some(dir) => Box::new(CsvDirSource::new(dir)),
        None => Box::new(sample_datasets()),
    };

    let dispatcher = Dispatcher::with_builtins(source);
    let mut console = Console::new(dispatcher, cli.output);

    let stdout = io::stdout();
    if cli.commands.is_empty() {
        let stdin = io::stdin();
        console.run(stdin.lock(), stdout.lock())?;
    } else {
        console.run_script(&cli.commands, stdout.lock())?;
    }
    Ok(())
}
