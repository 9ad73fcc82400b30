use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for depthqc-io operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error occurred while writing the report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The directory the report should land in does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirectoryMissing(PathBuf),

    /// The fully written temporary report could not be moved into place.
    #[error("Failed to move report into place at {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for depthqc-io operations.
pub type Result<T> = std::result::Result<T, ReportError>;
