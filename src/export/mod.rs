use std::path::Path;

use crate::errors::AppError;
use crate::models::{ResultRow, ResultTable};

/// Fixed CSV header: address, type.
pub const CSV_HEADER: [&str; 2] = ["地址", "类型"];

/// Write the whole table to `path`, replacing any existing file.
///
/// The header is always written, even for an empty table.
pub fn write_csv(path: &Path, table: &ResultTable) -> Result<(), AppError> {
    let export_err = |source: csv::Error| AppError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(export_err)?;
    writer.write_record(CSV_HEADER).map_err(export_err)?;
    for row in table {
        writer
            .write_record([row.address.as_str(), row.classification.label()])
            .map_err(export_err)?;
    }
    writer.flush().map_err(|e| export_err(e.into()))?;

    tracing::info!(path = %path.display(), rows = table.len(), "Results exported");
    Ok(())
}

/// Read a previously exported CSV back into a table.
pub fn read_csv(path: &Path) -> Result<ResultTable, AppError> {
    let export_err = |source: csv::Error| AppError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(export_err)?;
    let rows = reader
        .deserialize::<ResultRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(export_err)?;

    Ok(ResultTable::from(rows))
}
