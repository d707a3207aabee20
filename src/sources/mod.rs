//! Catalog retrieval: the single fetch of `books.json`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

mod catalog;
mod fetch;

pub use catalog::parse_catalog;
pub use fetch::{DEFAULT_FETCH_TIMEOUT, fetch_catalog, is_remote};

/// Ways the catalog fetch can fail. Every variant is shown to the user as an
/// inline error; none is retried.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Local catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Catalog path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Network-level failure talking to the catalog URL.
    #[error("failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("catalog request returned HTTP {0}")]
    Status(u16),
    /// No answer within the configured timeout.
    #[error("catalog fetch timed out after {0:?}")]
    Timeout(Duration),
    /// The body is not a JSON array of records.
    #[error("catalog is malformed: {0}")]
    Malformed(String),
}
