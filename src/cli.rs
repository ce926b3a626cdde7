use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Archive inspected when none is given on the command line.
pub const DEFAULT_ARCHIVE: &str = "dummy_copied.zip";

#[derive(Parser, Debug)]
#[command(name = "zipdescribe")]
#[command(version)]
#[command(about = "Describe the CSV files stored inside ZIP archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipdescribe data.zip                 describe every CSV in data.zip, both ways\n  \
  zipdescribe -m archive a.zip b.zip   use only the archive reader\n  \
  zipdescribe -m filesystem exports/   describe the CSVs under a directory")]
pub struct Cli {
    /// ZIP files (or, with the filesystem method, directories) to inspect
    #[arg(value_name = "ARCHIVE", default_value = DEFAULT_ARCHIVE)]
    pub archives: Vec<PathBuf>,

    /// How entries are listed and opened
    #[arg(short = 'm', long, value_enum, default_value_t = Method::Both)]
    pub method: Method,

    /// Log progress on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Less log output on stderr (-q errors only, -qq nothing)
    #[arg(short = 'q', long, action = clap::ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Read the archive's Central Directory directly
    Archive,
    /// Go through the generic filesystem interface
    Filesystem,
    /// Run both, archive first
    Both,
}

impl Cli {
    pub fn runs_archive(&self) -> bool {
        matches!(self.method, Method::Archive | Method::Both)
    }

    pub fn runs_filesystem(&self) -> bool {
        matches!(self.method, Method::Filesystem | Method::Both)
    }

    /// Default tracing filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (q, _) if q > 1 => "off",
            (1, _) => "error",
            (_, 0) => "warn",
            (_, 1) => "info",
            (_, 2) => "debug",
            _ => "trace",
        }
    }
}
