use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use depthqc_core::{DepthColumn, RegionSchema, RegionTable};
use depthqc_coverage::{CoverageStatistics, DepthThresholds};
use depthqc_io::ReportWrite;

use crate::config::DepthQcConfig;
use crate::utils::{prepare_output_dir, validate_sample};

/// `<input_dir>/<sample>.regions.bed.gz`
pub fn regions_path(input_dir: &Path, sample: &str) -> PathBuf {
    input_dir.join(format!("{}.regions.bed.gz", sample))
}

/// `<output_dir>/<sample>.coverage_stats.txt`
pub fn coverage_report_path(output_dir: &Path, sample: &str) -> PathBuf {
    output_dir.join(format!("{}.coverage_stats.txt", sample))
}

pub fn run_coverage(matches: &ArgMatches) -> Result<PathBuf> {
    let sample = matches
        .get_one::<String>("sample")
        .expect("--sample is required");
    validate_sample(sample)?;

    let config = DepthQcConfig::from_matches(matches)?;

    let input = match matches.get_one::<String>("input") {
        Some(path) => PathBuf::from(path),
        None => {
            let input_dir = matches
                .get_one::<String>("input-dir")
                .expect("--input-dir has a default");
            regions_path(Path::new(input_dir), sample)
        }
    };
    let output_dir = PathBuf::from(
        matches
            .get_one::<String>("output-dir")
            .expect("--output-dir has a default"),
    );

    // flag, then config file, then built-in default
    let thresholds = match (matches.get_one::<String>("thresholds"), config.coverage.thresholds) {
        (Some(raw), _) => raw
            .parse::<DepthThresholds>()
            .context("--thresholds must be a comma separated list of depths")?,
        (None, Some(from_config)) => DepthThresholds::new(from_config)
            .context("Invalid [coverage] thresholds in config file")?,
        (None, None) => DepthThresholds::default(),
    };

    let depth_column = matches
        .get_one::<usize>("depth-column")
        .copied()
        .or(config.coverage.depth_column)
        .map(DepthColumn::Index)
        .unwrap_or(DepthColumn::Last);
    let schema = RegionSchema::default().with_depth_column(depth_column);

    let regions = RegionTable::from_path(&input, &schema)
        .with_context(|| format!("Failed to load regions for sample {}", sample))?;
    let stats = regions
        .coverage_stats(&thresholds)
        .with_context(|| format!("Failed to compute coverage statistics for sample {}", sample))?;

    prepare_output_dir(&output_dir)?;
    let report_path = coverage_report_path(&output_dir, sample);
    stats
        .write_report(&report_path)
        .with_context(|| format!("Failed to write coverage report for sample {}", sample))?;

    info!(
        "Coverage statistics for {} complete. Results saved to {}",
        sample,
        report_path.display()
    );

    Ok(report_path)
}
