//! Error types for the engine library

use thiserror::Error;

/// Error type for parsing almanac input
///
/// Every failure in this crate is a parse failure: once an almanac has been
/// constructed, queries are pure arithmetic over validated integers and
/// cannot fail.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input doesn't match the expected almanac structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section or row is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}
