//! Biological sex estimation from chromosome-level sequencing depth.
//!
//! X and Y depth are normalized by the mean depth of the autosomes, and the resulting
//! ratios go through an ordered decision table with caller-supplied thresholds:
//!
//! | Order | Condition | Call | Confidence |
//! |---|---|---|---|
//! | 1 | `x > x_female_high` and `y < y_female_low` | Female (XX) | High |
//! | 2 | `x < x_male_low` and `y > y_male_high` | Male (XY) | High |
//! | 3 | `x > x_male_low` and `y > y_female_low` | Likely Female / XXY | Medium |
//! | 4 | `x < x_female_high` and `y < y_male_high` | Likely Male / X0 | Medium |
//! | else | | Indeterminate | Low |
//!
//! # Example
//!
//! ```no_run
//! use depthqc_core::ChromosomeTable;
//! use depthqc_sexcheck::{ChromNaming, SexThresholds, estimate_sex};
//!
//! let summary = ChromosomeTable::try_from("NA06994.mosdepth.summary.txt").unwrap();
//! let estimate = estimate_sex(&summary, ChromNaming::Chr, &SexThresholds::default()).unwrap();
//! println!("{}", estimate.classification.predicted_sex);
//! ```

pub mod classifier;
pub mod config;
pub mod errors;
pub mod estimate;

// re-exports
pub use classifier::{Classification, Confidence, CoverageRatios, PredictedSex, classify};
pub use config::{ChromNaming, SexThresholds};
pub use errors::SexCheckError;
pub use estimate::{SexEstimate, estimate_sex};
