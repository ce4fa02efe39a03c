//! Feed ingestion error types.

/// Error reading a tabular feed file.
///
/// Only whole-file problems surface here; individually malformed rows
/// are skipped during parsing, since upstream feed quality varies
/// run to run.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Underlying I/O failure
    #[error("failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    /// The table itself is unreadable (not just a bad row)
    #[error("malformed feed table: {0}")]
    Csv(#[from] csv::Error),
}

/// Error loading or publishing the schedule dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Underlying I/O failure
    #[error("dataset I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid dataset JSON
    #[error("invalid dataset document: {0}")]
    Json(#[from] serde_json::Error),
}
