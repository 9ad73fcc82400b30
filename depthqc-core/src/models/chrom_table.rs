use std::io::BufRead;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap;
use log::debug;

use crate::errors::{TableError, TableResult};
use crate::utils::{get_dynamic_reader, parse_depth};

pub const CHROM_COLUMN: &str = "chrom";
pub const MEAN_COLUMN: &str = "mean";

/// Name of the whole-genome row mosdepth appends to its summary.
pub const TOTAL_ROW: &str = "total";
/// Suffix of the rows mosdepth adds for the `--by` regions of each chromosome.
pub const REGION_ROW_SUFFIX: &str = "_region";

///
/// Mean depth of a single row of a mosdepth summary table.
///
#[derive(PartialEq, Debug, Clone)]
pub struct ChromosomeSummary {
    pub chrom: String,
    pub mean_depth: f64,
}

impl ChromosomeSummary {
    pub fn new(chrom: &str, mean_depth: f64) -> Self {
        ChromosomeSummary {
            chrom: chrom.to_string(),
            mean_depth,
        }
    }

    ///
    /// `true` for rows that describe a single chromosome, `false` for the aggregate
    /// rows (`total`, `total_region`, `<chrom>_region`).
    ///
    pub fn is_chromosome(&self) -> bool {
        self.chrom != TOTAL_ROW && !self.chrom.ends_with(REGION_ROW_SUFFIX)
    }
}

///
/// Per-chromosome mean depth, keyed uniquely by chromosome name. Iteration follows
/// the input order.
///
#[derive(Clone, Debug)]
pub struct ChromosomeTable {
    records: Vec<ChromosomeSummary>,
    index: FxHashMap<String, usize>,
    pub path: Option<PathBuf>,
}

impl ChromosomeTable {
    ///
    /// Build a table from records, rejecting duplicate chromosome names.
    ///
    pub fn from_records(records: Vec<ChromosomeSummary>) -> TableResult<Self> {
        Self::build(records, None)
    }

    fn build(records: Vec<ChromosomeSummary>, path: Option<PathBuf>) -> TableResult<Self> {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for (row, record) in records.iter().enumerate() {
            if index.insert(record.chrom.clone(), row).is_some() {
                return Err(TableError::MalformedRecord {
                    path: path.clone().unwrap_or_default(),
                    row,
                    reason: format!("duplicate chromosome '{}'", record.chrom),
                });
            }
        }

        Ok(ChromosomeTable {
            records,
            index,
            path,
        })
    }

    ///
    /// Read a mosdepth summary table (`<sample>.mosdepth.summary.txt`).
    ///
    /// The file is tab-separated with a header row that must name a `chrom` and a
    /// `mean` column. Other columns are ignored.
    pub fn from_path<P: AsRef<Path>>(path: P) -> TableResult<Self> {
        let path = path.as_ref();
        let reader = get_dynamic_reader(path)?;
        ChromosomeTable::from_reader(reader, path)
    }

    ///
    /// Read a summary table from any buffered reader. `source` is only used to label errors.
    ///
    /// Row indices in errors count data rows from 0, the header excluded.
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> TableResult<Self> {
        let read_error = |e| TableError::FileReadError {
            path: source.to_path_buf(),
            source: e,
        };
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line.map_err(read_error)?,
            None => String::new(),
        };
        let columns: Vec<&str> = header.trim_end_matches('\r').split('\t').collect();

        let column_index = |name: &str| {
            columns
                .iter()
                .position(|c| c.trim() == name)
                .ok_or_else(|| TableError::MissingColumn {
                    path: source.to_path_buf(),
                    column: name.to_string(),
                })
        };
        let chrom_idx = column_index(CHROM_COLUMN)?;
        let mean_idx = column_index(MEAN_COLUMN)?;

        let mut records: Vec<ChromosomeSummary> = Vec::new();
        for (row, line) in lines.enumerate() {
            let line = line.map_err(read_error)?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let malformed = |reason: String| TableError::MalformedRecord {
                path: source.to_path_buf(),
                row,
                reason,
            };

            let fields: Vec<&str> = line.split('\t').collect();
            let (Some(chrom), Some(mean)) = (fields.get(chrom_idx), fields.get(mean_idx)) else {
                return Err(malformed(format!(
                    "expected {} columns, found {}",
                    columns.len(),
                    fields.len()
                )));
            };

            let chrom = chrom.trim();
            if chrom.is_empty() {
                return Err(malformed("empty chromosome name".to_string()));
            }

            let mean_depth = parse_depth(mean).map_err(malformed)?;
            records.push(ChromosomeSummary::new(chrom, mean_depth));
        }

        debug!(
            "Read {} summary rows from {}",
            records.len(),
            source.display()
        );

        Self::build(records, Some(source.to_path_buf()))
    }

    pub fn get(&self, chrom: &str) -> Option<&ChromosomeSummary> {
        self.index.get(chrom).map(|&idx| &self.records[idx])
    }

    pub fn mean_depth(&self, chrom: &str) -> Option<f64> {
        self.get(chrom).map(|r| r.mean_depth)
    }

    ///
    /// Chromosome identifiers in input order.
    ///
    pub fn chroms(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.chrom.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChromosomeSummary> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<&Path> for ChromosomeTable {
    type Error = TableError;

    fn try_from(value: &Path) -> TableResult<Self> {
        ChromosomeTable::from_path(value)
    }
}

impl TryFrom<&str> for ChromosomeTable {
    type Error = TableError;

    fn try_from(value: &str) -> TableResult<Self> {
        ChromosomeTable::from_path(Path::new(value))
    }
}

impl<'a> IntoIterator for &'a ChromosomeTable {
    type Item = &'a ChromosomeSummary;
    type IntoIter = std::slice::Iter<'a, ChromosomeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
