//! Error types for roster-store.

use std::path::PathBuf;

use thiserror::Error;

use roster_core::CompanyError;

/// All errors that can arise from persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encode error, or decode error of a bracketed array document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single line of a line-delimited document failed to decode.
    #[error("failed to decode employee on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The company rejected a restored employee.
    #[error("company error: {0}")]
    Company(#[from] CompanyError),

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}
