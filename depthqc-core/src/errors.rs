use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Malformed record at row {row} of {}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    #[error("Required column `{column}` is missing from the header of {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Can't read file {}: {source}", .path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TableResult<T> = std::result::Result<T, TableError>;
