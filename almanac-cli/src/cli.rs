//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the seeds line is interpreted
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum SeedMode {
    /// Every number on the seeds line is one candidate value
    #[default]
    Scalars,
    /// Consecutive number pairs form (start, length) candidate ranges
    Ranges,
}

impl SeedMode {
    /// Label used in result output
    pub fn label(&self) -> &'static str {
        match self {
            SeedMode::Scalars => "scalars",
            SeedMode::Ranges => "ranges",
        }
    }
}

/// Almanac range-mapping engine runner
#[derive(Parser, Debug)]
#[command(
    name = "almanac",
    about = "Find the minimum mapped value of an almanac",
    version
)]
pub struct Args {
    /// Almanac input file (reads stdin if omitted)
    pub input: Option<PathBuf>,

    /// How to interpret the seeds line
    #[arg(short, long, value_enum, default_value = "scalars")]
    pub mode: SeedMode,

    /// Number of threads for the query (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Quiet mode - only output the answer
    #[arg(short, long)]
    pub quiet: bool,
}
