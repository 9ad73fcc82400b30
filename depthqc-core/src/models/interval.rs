use std::fmt::{self, Display};

///
/// One row of a region depth table: a half-open interval `[start, end)` with
/// the mean sequencing depth measured over it.
///
#[derive(PartialEq, Debug, Clone)]
pub struct IntervalRecord {
    pub chr: String,
    pub start: u64,
    pub end: u64,
    pub mean_depth: f64,
}

impl IntervalRecord {
    pub fn new(chr: &str, start: u64, end: u64, mean_depth: f64) -> Self {
        IntervalRecord {
            chr: chr.to_string(),
            start,
            end,
            mean_depth,
        }
    }

    ///
    /// Number of bases covered by the interval. Zero for inverted or empty intervals.
    ///
    pub fn length(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_valid(&self) -> bool {
        self.end > self.start && self.mean_depth.is_finite() && self.mean_depth >= 0.0
    }
}

impl Display for IntervalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.chr, self.start, self.end, self.mean_depth
        )
    }
}
