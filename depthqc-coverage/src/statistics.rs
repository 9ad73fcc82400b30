//! Coverage statistics for RegionTables
//!
//! Every base counts once: region depths are weighted by region length, both for the
//! mean depth and for the breadth of coverage at each threshold.
//!

use log::debug;

use depthqc_core::{RegionTable, TableError};

use crate::errors::CoverageError;
use crate::models::{Breadth, CoverageStats, DepthThresholds};

/// Trait for computing depth and breadth of coverage over a set of regions.
pub trait CoverageStatistics {
    /// Compute length-weighted mean depth and breadth of coverage.
    ///
    /// For each threshold `t`, breadth is the share of bases in regions with
    /// `mean_depth >= t`, as a percentage of all bases.
    ///
    /// Fails with [`CoverageError::EmptyInput`] when there are no bases to divide by,
    /// and with a malformed-record error when a region is inverted, has an invalid depth,
    /// or pushes the base count or the depth sum out of range.
    fn coverage_stats(&self, thresholds: &DepthThresholds) -> Result<CoverageStats, CoverageError>;
}

impl CoverageStatistics for RegionTable {
    fn coverage_stats(&self, thresholds: &DepthThresholds) -> Result<CoverageStats, CoverageError> {
        let mut total_bases: u64 = 0;
        let mut weighted_depth: f64 = 0.0;
        let mut bases_at: Vec<u64> = vec![0; thresholds.len()];

        // single pass: lengths, weighted depth and per-threshold bases together
        for (row, record) in self.iter().enumerate() {
            let malformed = |reason: String| -> CoverageError {
                TableError::MalformedRecord {
                    path: self.path.clone().unwrap_or_default(),
                    row,
                    reason,
                }
                .into()
            };

            if !record.is_valid() {
                return Err(malformed(format!("invalid interval '{}'", record)));
            }

            let length = record.length();
            total_bases = total_bases
                .checked_add(length)
                .ok_or_else(|| malformed("total region length overflows".to_string()))?;

            weighted_depth += record.mean_depth * length as f64;
            if !weighted_depth.is_finite() {
                return Err(malformed(format!(
                    "depth sum overflows at interval '{}'",
                    record
                )));
            }

            for (bases, threshold) in bases_at.iter_mut().zip(thresholds.iter()) {
                if record.mean_depth >= *threshold {
                    *bases += length;
                }
            }
        }

        if total_bases == 0 {
            return Err(CoverageError::EmptyInput(self.source()));
        }

        let total = total_bases as f64;
        let mean_depth = weighted_depth / total;

        let breadth: Vec<Breadth> = thresholds
            .iter()
            .zip(bases_at)
            .map(|(&threshold, bases)| Breadth {
                threshold,
                bases,
                percent: bases as f64 / total * 100.0,
            })
            .collect();

        debug!(
            "{}: {} regions, {} bases, mean depth {:.4}",
            self.source(),
            self.len(),
            total_bases,
            mean_depth
        );

        Ok(CoverageStats {
            total_bases,
            mean_depth,
            breadth,
        })
    }
}
