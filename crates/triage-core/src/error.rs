use thiserror::Error;

/// Errors from the reconciliation core and the history store.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Filesystem failure while writing the history file.
    #[error("history I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure while writing the history file.
    #[error("history CSV error: {0}")]
    Csv(#[from] csv::Error),
}
