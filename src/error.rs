use thiserror::Error;

/// Crate-wide error type.
///
/// The selection core itself never fails: missing or unknown schema metadata
/// degrades to empty lookups. Errors only occur at the snapshot-loading
/// boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
