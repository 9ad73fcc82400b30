pub mod chrom_table;
pub mod interval;
pub mod region_table;

// re-export for cleaner imports
pub use self::chrom_table::{ChromosomeSummary, ChromosomeTable};
pub use self::interval::IntervalRecord;
pub use self::region_table::{DepthColumn, RegionSchema, RegionTable};
