use serde_json::Value;

use super::LoadError;
use crate::state::RawBook;

/// What: Decode a catalog body into raw records.
///
/// Inputs:
/// - `body`: Response body or file contents
///
/// Output:
/// - `Ok(records)` in source order; `Err(LoadError::Malformed)` when the body is not a JSON array.
///
/// Details:
/// - Individual entries that are not decodable records (wrong field types, non-objects)
///   are skipped with a warning rather than failing the whole catalog.
///
/// # Errors
/// - Returns `LoadError::Malformed` for invalid JSON or a non-array top level.
pub fn parse_catalog(body: &str) -> Result<Vec<RawBook>, LoadError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| LoadError::Malformed(e.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(LoadError::Malformed(
            "expected a JSON array of books".to_string(),
        ));
    };
    let mut out = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<RawBook>(entry) {
            Ok(rec) => out.push(rec),
            Err(e) => {
                tracing::warn!(index, error = %e, "[Sources] Skipping undecodable catalog entry");
            }
        }
    }
    Ok(out)
}
