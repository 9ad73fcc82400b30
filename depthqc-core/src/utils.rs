use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{TableError, TableResult};

///
/// Check whether a file should be read through a gzip decoder.
///
pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> TableResult<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TableError::InputNotFound(path.to_path_buf()),
        _ => TableError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Parse a depth value, rejecting anything that is not a finite, non-negative number.
///
pub fn parse_depth(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(depth) if depth.is_finite() && depth >= 0.0 => Ok(depth),
        Ok(depth) => Err(format!("depth {} is not a finite, non-negative number", depth)),
        Err(_) => Err(format!("depth '{}' is not numeric", raw)),
    }
}
