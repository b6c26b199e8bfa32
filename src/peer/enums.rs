/// Lifecycle of one file download.
pub mod download_state;

/// Result of one exchange worker.
pub mod exchange_outcome;
