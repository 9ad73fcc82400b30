use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use depthqc_core::ChromosomeTable;
use depthqc_io::{ReportWrite, SexReport};
use depthqc_sexcheck::{ChromNaming, SexThresholds, estimate_sex};

use crate::config::DepthQcConfig;
use crate::sexcheck::cli::{CHR_FORMAT, X_FEMALE_HIGH, X_MALE_LOW, Y_FEMALE_LOW, Y_MALE_HIGH};
use crate::utils::{prepare_output_dir, validate_sample};

/// `<input_dir>/<sample>/<sample>.mosdepth.summary.txt`
pub fn summary_path(input_dir: &Path, sample: &str) -> PathBuf {
    input_dir
        .join(sample)
        .join(format!("{}.mosdepth.summary.txt", sample))
}

/// `<outdir>/<sample>_sex_estimate.txt`
pub fn sex_report_path(outdir: &Path, sample: &str) -> PathBuf {
    outdir.join(format!("{}_sex_estimate.txt", sample))
}

///
/// Thresholds from the command line, then the config file, then the built-in defaults.
///
fn resolve_thresholds(matches: &ArgMatches, config: &DepthQcConfig) -> SexThresholds {
    let base = config.sexcheck.thresholds_over(SexThresholds::default());
    let flag = |id: &str, fallback: f64| matches.get_one::<f64>(id).copied().unwrap_or(fallback);

    SexThresholds {
        x_female_high: flag(X_FEMALE_HIGH, base.x_female_high),
        y_female_low: flag(Y_FEMALE_LOW, base.y_female_low),
        x_male_low: flag(X_MALE_LOW, base.x_male_low),
        y_male_high: flag(Y_MALE_HIGH, base.y_male_high),
    }
}

pub fn run_sexcheck(matches: &ArgMatches) -> Result<PathBuf> {
    let sample = matches
        .get_one::<String>("sample")
        .expect("--sample is required");
    validate_sample(sample)?;

    let config = DepthQcConfig::from_matches(matches)?;

    let summary = match matches.get_one::<String>("input") {
        Some(path) => PathBuf::from(path),
        None => {
            let input_dir = matches
                .get_one::<String>("input-dir")
                .expect("--input-dir has a default");
            summary_path(Path::new(input_dir), sample)
        }
    };
    let outdir = PathBuf::from(
        matches
            .get_one::<String>("outdir")
            .expect("--outdir has a default"),
    );

    let naming = match matches
        .get_one::<String>(CHR_FORMAT)
        .or(config.sexcheck.chr_format.as_ref())
    {
        Some(raw) => raw.parse::<ChromNaming>()?,
        None => ChromNaming::default(),
    };
    let thresholds = resolve_thresholds(matches, &config);

    let table = ChromosomeTable::from_path(&summary)
        .with_context(|| format!("Failed to read mosdepth summary for sample {}", sample))?;
    let estimate = estimate_sex(&table, naming, &thresholds)
        .with_context(|| format!("Sex estimation failed for sample {}", sample))?;

    prepare_output_dir(&outdir)?;
    let report_path = sex_report_path(&outdir, sample);
    SexReport::new(sample, &estimate)
        .write_report(&report_path)
        .with_context(|| format!("Failed to write sex estimate for sample {}", sample))?;

    info!(
        "Sex estimation for {} complete. Results saved to {}",
        sample,
        report_path.display()
    );

    Ok(report_path)
}
