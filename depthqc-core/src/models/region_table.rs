use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{TableError, TableResult};
use crate::models::IntervalRecord;
use crate::utils::{get_dynamic_reader, parse_depth};

/// Where the mean depth lives in a region row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthColumn {
    /// The last column of each row, whatever the row width (mosdepth layout).
    Last,
    /// A fixed 0-based column index.
    Index(usize),
}

impl DepthColumn {
    fn resolve(&self, n_fields: usize) -> Option<usize> {
        match self {
            DepthColumn::Last => n_fields.checked_sub(1),
            DepthColumn::Index(idx) => (*idx < n_fields).then_some(*idx),
        }
    }
}

///
/// Mapping from column positions of a headerless, tab-separated region file to the
/// semantic fields of an [IntervalRecord].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSchema {
    pub chr: usize,
    pub start: usize,
    pub end: usize,
    pub depth: DepthColumn,
}

impl Default for RegionSchema {
    fn default() -> Self {
        RegionSchema {
            chr: 0,
            start: 1,
            end: 2,
            depth: DepthColumn::Last,
        }
    }
}

impl RegionSchema {
    pub fn with_depth_column(mut self, depth: DepthColumn) -> Self {
        self.depth = depth;
        self
    }

    fn parse_record(&self, line: &str) -> Result<IntervalRecord, String> {
        let fields: Vec<&str> = line.split('\t').collect();

        let widest = self.chr.max(self.start).max(self.end);
        if widest >= fields.len() {
            return Err(format!(
                "expected at least {} columns, found {}",
                widest + 1,
                fields.len()
            ));
        }

        let depth_idx = self
            .depth
            .resolve(fields.len())
            .ok_or_else(|| format!("depth column {:?} is out of range", self.depth))?;
        if depth_idx == self.start || depth_idx == self.end {
            return Err(format!(
                "depth column {} overlaps a coordinate column",
                depth_idx
            ));
        }

        let start = parse_coordinate(fields[self.start], "start")?;
        let end = parse_coordinate(fields[self.end], "end")?;
        if end <= start {
            return Err(format!(
                "end ({}) must be greater than start ({})",
                end, start
            ));
        }

        let mean_depth = parse_depth(fields[depth_idx])?;

        Ok(IntervalRecord {
            chr: fields[self.chr].to_owned(),
            start,
            end,
            mean_depth,
        })
    }
}

fn parse_coordinate(raw: &str, name: &str) -> Result<u64, String> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| format!("{} '{}' is not a non-negative integer", name, raw))
}

///
/// RegionTable struct, the in-memory form of a per-region depth file such as
/// mosdepth's `regions.bed.gz`. Records keep their input order.
///
#[derive(Clone, Debug)]
pub struct RegionTable {
    pub records: Vec<IntervalRecord>,
    pub path: Option<PathBuf>,
}

impl RegionTable {
    ///
    /// Read a region table from disk, gzip'd or not.
    ///
    /// # Arguments:
    /// - path: path to the region file
    /// - schema: column mapping used for every row
    pub fn from_path<P: AsRef<Path>>(path: P, schema: &RegionSchema) -> TableResult<Self> {
        let path = path.as_ref();
        let reader = get_dynamic_reader(path)?;
        RegionTable::from_reader(reader, schema, path)
    }

    ///
    /// Read a region table from any buffered reader. `source` is only used to label errors.
    ///
    pub fn from_reader<R: BufRead>(
        reader: R,
        schema: &RegionSchema,
        source: &Path,
    ) -> TableResult<Self> {
        let mut records: Vec<IntervalRecord> = Vec::new();

        for (row, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| TableError::FileReadError {
                path: source.to_path_buf(),
                source: e,
            })?;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty()
                || line.starts_with('#')
                || line.starts_with("track")
                || line.starts_with("browser")
            {
                continue;
            }

            let record = schema
                .parse_record(line)
                .map_err(|reason| TableError::MalformedRecord {
                    path: source.to_path_buf(),
                    row,
                    reason,
                })?;
            records.push(record);
        }

        debug!("Read {} regions from {}", records.len(), source.display());

        Ok(RegionTable {
            records,
            path: Some(source.to_path_buf()),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IntervalRecord> {
        self.records.iter()
    }

    ///
    /// Human readable label of where the table came from, for error messages.
    ///
    pub fn source(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<in-memory region table>".to_string(),
        }
    }
}

impl TryFrom<&Path> for RegionTable {
    type Error = TableError;

    ///
    /// Read a mosdepth-style region file using the default [RegionSchema].
    ///
    fn try_from(value: &Path) -> TableResult<Self> {
        RegionTable::from_path(value, &RegionSchema::default())
    }
}

impl TryFrom<&str> for RegionTable {
    type Error = TableError;

    fn try_from(value: &str) -> TableResult<Self> {
        RegionTable::try_from(Path::new(value))
    }
}

impl From<Vec<IntervalRecord>> for RegionTable {
    fn from(records: Vec<IntervalRecord>) -> Self {
        RegionTable {
            records,
            path: None,
        }
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a IntervalRecord;
    type IntoIter = std::slice::Iter<'a, IntervalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/coverage")
            .join(file_name)
    }

    fn parse(input: &str, schema: &RegionSchema) -> TableResult<RegionTable> {
        RegionTable::from_reader(Cursor::new(input), schema, Path::new("inline.bed"))
    }

    #[rstest]
    #[case("NA06994.regions.bed")]
    #[case("NA06994.regions.bed.gz")]
    fn test_read_region_file(#[case] file_name: &str) {
        let path = get_test_path(file_name);
        let table = RegionTable::try_from(path.as_path()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.records[0], IntervalRecord::new("chr1", 0, 100, 5.0));
        assert_eq!(table.records[2], IntervalRecord::new("chr1", 150, 200, 40.0));
        assert_eq!(table.path, Some(path));
    }

    #[rstest]
    fn test_missing_file() {
        let path = get_test_path("does-not-exist.regions.bed.gz");
        let result = RegionTable::try_from(path.as_path());
        assert!(matches!(result, Err(TableError::InputNotFound(_))));
    }

    #[rstest]
    fn test_depth_is_last_column_regardless_of_width() {
        let table = parse(
            "chr1\t0\t10\t7.5\nchr1\t10\t20\tEXON2\t9.25\n",
            &RegionSchema::default(),
        )
        .unwrap();

        let depths: Vec<f64> = table.iter().map(|r| r.mean_depth).collect();
        assert_eq!(depths, vec![7.5, 9.25]);
    }

    #[rstest]
    fn test_explicit_depth_column() {
        let schema = RegionSchema::default().with_depth_column(DepthColumn::Index(3));
        let table = parse("chr2\t5\t15\t12\tignored\n", &schema).unwrap();
        assert_eq!(table.records[0], IntervalRecord::new("chr2", 5, 15, 12.0));
    }

    #[rstest]
    fn test_skips_blank_and_comment_lines() {
        let table = parse(
            "# chrom\tstart\tend\tmean\n\nchr1\t0\t10\t1.0\n\n",
            &RegionSchema::default(),
        )
        .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[rstest]
    fn test_empty_input_is_an_empty_table() {
        let table = parse("", &RegionSchema::default()).unwrap();
        assert!(table.is_empty());
    }

    #[rstest]
    #[case("chr1\t0\t10\tlow\n", 0, "not numeric")]
    #[case("chr1\t0\t10\t1.0\nchr1\t20\t20\t1.0\n", 1, "must be greater than start")]
    #[case("chr1\t0\t10\t1.0\nchr1\t0\t10\t2.0\nchr1\t30\t25\t1.0\n", 2, "must be greater than start")]
    #[case("chr1\tabc\t10\t1.0\n", 0, "start 'abc'")]
    #[case("chr1\t-5\t10\t1.0\n", 0, "start '-5'")]
    #[case("chr1\t0\n", 0, "expected at least 3 columns")]
    #[case("chr1\t0\t10\n", 0, "overlaps a coordinate column")]
    #[case("chr1\t0\t10\tNaN\n", 0, "finite")]
    fn test_malformed_rows(#[case] input: &str, #[case] bad_row: usize, #[case] needle: &str) {
        let result = parse(input, &RegionSchema::default());

        match result {
            Err(TableError::MalformedRecord { path, row, reason }) => {
                assert_eq!(path, PathBuf::from("inline.bed"));
                assert_eq!(row, bad_row);
                assert!(reason.contains(needle), "unexpected reason: {}", reason);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[rstest]
    fn test_from_records_has_no_path() {
        let table = RegionTable::from(vec![IntervalRecord::new("chr1", 0, 1, 1.0)]);
        assert_eq!(table.source(), "<in-memory region table>");
    }
}
