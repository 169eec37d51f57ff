use std::path::Path;

use crate::errors::AppError;

/// Load addresses from a newline-delimited file, in file order.
pub async fn load_addresses(path: &Path) -> Result<Vec<String>, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::AddressFile {
            path: path.to_path_buf(),
            source,
        })?;

    let addresses = parse_addresses(&raw);
    tracing::info!(path = %path.display(), count = addresses.len(), "Loaded address file");

    Ok(addresses)
}

/// Split file contents into addresses.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Duplicates
/// are kept, each one is classified on its own.
pub fn parse_addresses(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
