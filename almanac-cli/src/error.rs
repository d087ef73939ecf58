//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The almanac text was malformed
    #[error("{0}")]
    Parse(#[from] almanac_engine::ParseError),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The seeds line produced no candidates to minimize over
    #[error("No candidate seed values in input")]
    NoSeeds,
}
