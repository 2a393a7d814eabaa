//! Error types for snipline
//!
//! Highlighting itself never fails; these cover the edges around it
//! (loading files, reading configuration, parsing arguments, writing output).

use thiserror::Error;

/// Result type alias for snipline operations
pub type Result<T> = std::result::Result<T, SnipError>;

/// Snipline error types
#[derive(Error, Debug)]
pub enum SnipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config syntax error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid value for `{key}`: {value}")]
    InvalidSetting { key: String, value: String },

    #[error("Unknown language standard: {0}")]
    UnknownStandard(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Line {line} is out of range (file has {count} lines)")]
    LineOutOfRange { line: usize, count: usize },
}
