//! Error types for uav-output.

use thiserror::Error;

/// Errors that can occur when writing trajectory output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no output file for vehicle {uav} (writer opened {count})")]
    UnknownVehicle { uav: u32, count: usize },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
