use std::path::PathBuf;

use crate::nimble::NimbleClientError;

/// Errors that end a sorting run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("cannot read address file {path}: {source}")]
    AddressFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot export results to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("network failure while checking {address}: {source}")]
    Network {
        address: String,
        #[source]
        source: NimbleClientError,
    },
}
