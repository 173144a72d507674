use thiserror::Error;

/// Error type that captures common timesheet failures.
#[derive(Debug, Error)]
pub enum TimesheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    Invalid(String),
}
