use depthqc_core::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("No bases to aggregate: {0} contains no regions")]
    EmptyInput(String),

    #[error("Depth threshold must be a finite, non-negative number, got {0}")]
    InvalidThreshold(f64),

    #[error("At least one depth threshold is required")]
    NoThresholds,

    #[error("Can't parse depth thresholds '{0}': expected a comma separated list of numbers")]
    ThresholdParseError(String),

    #[error(transparent)]
    Table(#[from] TableError),
}
