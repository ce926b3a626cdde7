//! Main entry point for the zipdescribe CLI application.
//!
//! Prints summary statistics for every CSV inside the given ZIP archives,
//! once through the archive reader and once through the filesystem
//! interface (or just one of them, see `--method`).

use anyhow::Result;
use clap::Parser;
use std::io::{BufWriter, Write};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use zipdescribe::{Cli, describe_csvs_with_archive, describe_csvs_with_filesystem};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let mut out = BufWriter::new(std::io::stdout().lock());

    if cli.runs_archive() {
        info!("describing CSVs with the archive reader");
        describe_csvs_with_archive(&cli.archives, &mut out)?;
    }

    if cli.runs_filesystem() {
        if cli.runs_archive() {
            writeln!(out)?;
        }
        info!("describing CSVs with the filesystem interface");
        describe_csvs_with_filesystem(&cli.archives, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
