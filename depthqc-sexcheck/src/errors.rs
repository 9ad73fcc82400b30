use depthqc_core::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SexCheckError {
    #[error(
        "Could not find coverage information for chromosome(s) {} in the summary. Available chromosomes: {}",
        .missing.join(", "),
        .available.join(", ")
    )]
    ChromosomeNotFound {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("Could not determine autosome coverage: {0}")]
    DegenerateInput(String),

    #[error("Invalid classification thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Invalid chromosome naming convention '{0}': expected 'chr' or an empty prefix")]
    InvalidChromNaming(String),

    #[error(transparent)]
    Table(#[from] TableError),
}
