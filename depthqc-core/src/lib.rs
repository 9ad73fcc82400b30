//! # Core models for depthqc
//!
//! Typed representations of the two mosdepth outputs depthqc works from:
//!
//! - [`RegionTable`]: per-region mean depth (`<sample>.regions.bed.gz`), read through an
//!   explicit [`RegionSchema`] so downstream code never deals with column positions.
//! - [`ChromosomeTable`]: per-chromosome mean depth (`<sample>.mosdepth.summary.txt`),
//!   keyed by chromosome name.
//!
//! Both readers transparently handle gzip-compressed input and report malformed rows with
//! the file path and row index.
//!
//! # Example
//!
//! ```no_run
//! use depthqc_core::models::{RegionSchema, RegionTable};
//!
//! let table = RegionTable::from_path("NA06994.regions.bed.gz", &RegionSchema::default()).unwrap();
//! println!("{} regions", table.len());
//! ```
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{TableError, TableResult};
pub use models::{ChromosomeSummary, ChromosomeTable, DepthColumn, IntervalRecord, RegionSchema, RegionTable};
