//! `tailbuf` command-line entry point.

mod cli;
mod run;

use std::{
    fs::File,
    io::{self, BufReader},
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let options = cli.script_options();
    let stdout = io::stdout().lock();
    if cli.reads_stdin() {
        run::run(io::stdin().lock(), stdout, options)
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("failed to open {}", cli.input.display()))?;
        run::run(BufReader::new(file), stdout, options)
            .with_context(|| format!("while processing {}", cli.input.display()))
    }
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env();
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.init();
}
