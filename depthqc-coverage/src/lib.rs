//! Breadth and depth of coverage for region sets.
//!
//! Given a [`RegionTable`](depthqc_core::RegionTable) of intervals annotated with mean
//! depth, this crate computes:
//!
//! - the total number of bases covered by the regions
//! - the mean depth, weighted by region length so every base counts once
//! - for each depth threshold, the percentage of bases at or above it
//!
//! # Example
//!
//! ```no_run
//! use depthqc_core::RegionTable;
//! use depthqc_coverage::{CoverageStatistics, DepthThresholds};
//!
//! let regions = RegionTable::try_from("NA06994.regions.bed.gz").unwrap();
//! let stats = regions.coverage_stats(&DepthThresholds::default()).unwrap();
//! println!("{:.2}", stats.mean_depth);
//! ```

pub mod errors;
pub mod models;
pub mod statistics;

// re-exports
pub use errors::CoverageError;
pub use models::{Breadth, CoverageStats, DepthThresholds};
pub use statistics::CoverageStatistics;
