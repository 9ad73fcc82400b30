//! # Report writers for depthqc
//!
//! Small, deterministic flat-text reports: one for breadth and depth of coverage, one for
//! the sex estimate. Numbers are printed with two decimals.
//!
//! Reports are written all-or-nothing. The whole report is rendered in memory, written to a
//! temporary file next to the destination and then moved over it, so a failed write never
//! leaves a truncated report behind. The destination directory must already exist.
//!
pub mod coverage;
pub mod error;
pub mod report;
pub mod sex;

// re-expose core functions
pub use error::*;
pub use report::*;
pub use sex::SexReport;
