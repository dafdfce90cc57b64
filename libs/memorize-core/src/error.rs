//! Error types for memorize-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a passage set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("set title given twice at line {line}")]
    DuplicateSetTitle { line: usize },

    #[error("text outside of any passage at line {line}")]
    ContentOutsidePassage { line: usize },

    #[error("no passages with content")]
    NoPassages,
}

/// Errors from validating study settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("hint percentage must be between 0 and 100, got {value}")]
    PercentageOutOfRange { value: u32 },
}
