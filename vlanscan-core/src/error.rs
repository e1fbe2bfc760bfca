//! Error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The workbook could not be opened; nothing was scanned
    #[error("failed to open file for parsing: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("failed to create file: {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing stopped at `record`; the file keeps what was written before it.
    /// Record 0 is the header.
    #[error("failed to write record {record}")]
    Write {
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush output")]
    Flush(#[from] std::io::Error),
}
