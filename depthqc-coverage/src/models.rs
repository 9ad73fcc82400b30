use std::str::FromStr;

use crate::errors::CoverageError;

/// Depth thresholds reported when the caller does not configure any.
pub const DEFAULT_DEPTH_THRESHOLDS: [f64; 2] = [10.0, 30.0];

///
/// Ordered list of depth thresholds for breadth-of-coverage reporting.
///
/// Never empty, and every threshold is finite and non-negative. Order is kept as given, so the
/// report lists thresholds in the order they were configured.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthThresholds(Vec<f64>);

impl DepthThresholds {
    pub fn new(thresholds: Vec<f64>) -> Result<Self, CoverageError> {
        if thresholds.is_empty() {
            return Err(CoverageError::NoThresholds);
        }
        if let Some(&bad) = thresholds.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(CoverageError::InvalidThreshold(bad));
        }
        Ok(DepthThresholds(thresholds))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DepthThresholds {
    fn default() -> Self {
        DepthThresholds(DEFAULT_DEPTH_THRESHOLDS.to_vec())
    }
}

impl FromStr for DepthThresholds {
    type Err = CoverageError;

    /// Parse a comma separated list, e.g. `10,30` or `1, 5, 20.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let thresholds = s
            .split(',')
            .map(|t| t.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| CoverageError::ThresholdParseError(s.to_string()))?;

        DepthThresholds::new(thresholds)
    }
}

/// Breadth of coverage at a single depth threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadth {
    /// Minimum depth a region needs to count towards this threshold
    pub threshold: f64,
    /// Bases in regions with depth `>= threshold`
    pub bases: u64,
    /// `bases / total_bases * 100`
    pub percent: f64,
}

/// Aggregate coverage statistics for one region table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageStats {
    /// Sum of region lengths
    pub total_bases: u64,
    /// Length-weighted mean depth
    pub mean_depth: f64,
    /// One entry per configured threshold, in configuration order
    pub breadth: Vec<Breadth>,
}
