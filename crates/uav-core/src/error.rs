//! Error type shared by the core loaders.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use std::fmt;

use thiserror::Error;

/// One non-fatal problem found while scanning a configuration file.
///
/// Warnings do not stop the scan, but any warning rejects the load once the
/// whole file has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// 1-based line number in the source.
    pub line:   usize,
    pub key:    String,
    pub reason: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: '{}': {}", self.line, self.key, self.reason)
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("configuration rejected: {} field(s) missing or unparsable", .0.len())]
    ConfigRejected(Vec<ConfigWarning>),

    #[error("parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `uav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
