use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the employee records from the data source.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed employee payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid employee record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
