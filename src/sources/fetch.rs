use std::path::PathBuf;
use std::time::Duration;

use super::LoadError;
use super::catalog::parse_catalog;
use crate::state::RawBook;

/// Default upper bound for the whole catalog fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Whether `source` names an HTTP(S) URL rather than a local file.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    let s = source.trim_start().to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://")
}

/// Fetch the body of a remote catalog.
async fn fetch_remote(url: &str, timeout: Duration) -> Result<String, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("Aklatell/{}", env!("CARGO_PKG_VERSION")))
        .build()?;
    let resp = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            LoadError::Timeout(timeout)
        } else {
            LoadError::Http(e)
        }
    })?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    resp.text().await.map_err(|e| {
        if e.is_timeout() {
            LoadError::Timeout(timeout)
        } else {
            LoadError::Http(e)
        }
    })
}

/// Read the body of a local catalog file.
async fn fetch_local(path: &str) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: PathBuf::from(path),
            source,
        })
}

/// What: Fetch and decode the catalog from a URL or a local path.
///
/// Inputs:
/// - `source`: `http(s)://` URL or filesystem path to `books.json`
/// - `timeout`: Upper bound for the whole operation
///
/// Output:
/// - `Ok(records)` in source order, or the `LoadError` to show the user.
///
/// Details:
/// - The whole fetch runs under `tokio::time::timeout`, so a stalled server or a
///   blocked file read fails instead of hanging the UI in its loading state.
///
/// # Errors
/// - `Timeout` when the deadline passes, `Status` for non-success responses,
///   `Http`/`Io` for transport failures, `Malformed` for bodies that are not a JSON array.
pub async fn fetch_catalog(source: &str, timeout: Duration) -> Result<Vec<RawBook>, LoadError> {
    tracing::info!(source, timeout_ms = timeout.as_millis(), "[Sources] Fetching catalog");
    let body = async {
        if is_remote(source) {
            fetch_remote(source, timeout).await
        } else {
            fetch_local(source).await
        }
    };
    let body = tokio::time::timeout(timeout, body)
        .await
        .map_err(|_| LoadError::Timeout(timeout))??;
    let records = parse_catalog(&body)?;
    tracing::info!(
        source,
        bytes = body.len(),
        records = records.len(),
        "[Sources] Catalog fetched"
    );
    Ok(records)
}
