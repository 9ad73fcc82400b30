use log::{debug, warn};

use depthqc_core::ChromosomeTable;

use crate::classifier::{Classification, CoverageRatios, classify};
use crate::config::{ChromNaming, SexThresholds};
use crate::errors::SexCheckError;

/// Everything derived from one summary table on the way to a sex call.
#[derive(Debug, Clone, PartialEq)]
pub struct SexEstimate {
    /// Identifier of the X chromosome, e.g. `chrX`
    pub x_chr: String,
    /// Identifier of the Y chromosome, e.g. `chrY`
    pub y_chr: String,
    /// Mean depth of the X chromosome
    pub x_depth: f64,
    /// Mean depth of the Y chromosome
    pub y_depth: f64,
    /// Unweighted mean of the per-chromosome depth of all other chromosomes
    pub autosome_depth: f64,
    pub ratios: CoverageRatios,
    pub classification: Classification,
}

///
/// Mean depth across autosomes: every per-chromosome row except `x_chr` and `y_chr`.
/// The `total` and `*_region` rows are never part of the baseline.
///
/// Fails with [`SexCheckError::DegenerateInput`] when no autosome row is left or the
/// baseline is zero or not finite.
pub fn autosome_depth(
    table: &ChromosomeTable,
    x_chr: &str,
    y_chr: &str,
) -> Result<f64, SexCheckError> {
    let source = table
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "summary table".to_string());

    let (autosomes, aggregates): (Vec<_>, Vec<_>) = table
        .iter()
        .filter(|r| r.chrom != x_chr && r.chrom != y_chr)
        .partition(|r| r.is_chromosome());

    debug!(
        "Autosome baseline from {} rows, skipped {} aggregate rows",
        autosomes.len(),
        aggregates.len()
    );

    if autosomes.is_empty() {
        if !aggregates.is_empty() {
            warn!(
                "{} only holds aggregate rows besides {} and {}",
                source, x_chr, y_chr
            );
        }
        return Err(SexCheckError::DegenerateInput(format!(
            "no autosome rows in {}",
            source
        )));
    }

    let mean = autosomes.iter().map(|r| r.mean_depth).sum::<f64>() / autosomes.len() as f64;
    if !mean.is_finite() {
        return Err(SexCheckError::DegenerateInput(format!(
            "mean autosome depth in {} is out of range",
            source
        )));
    }
    if mean == 0.0 {
        return Err(SexCheckError::DegenerateInput(format!(
            "mean autosome depth in {} is zero",
            source
        )));
    }

    Ok(mean)
}

///
/// Estimate biological sex from a mosdepth summary table.
///
/// # Arguments
/// - table: per-chromosome mean depth
/// - naming: whether chromosome names carry the `chr` prefix
/// - thresholds: ratio thresholds for the decision table
pub fn estimate_sex(
    table: &ChromosomeTable,
    naming: ChromNaming,
    thresholds: &SexThresholds,
) -> Result<SexEstimate, SexCheckError> {
    thresholds.validate()?;

    let x_chr = naming.x_chr();
    let y_chr = naming.y_chr();

    let (x_depth, y_depth) = match (table.mean_depth(&x_chr), table.mean_depth(&y_chr)) {
        (Some(x_depth), Some(y_depth)) => (x_depth, y_depth),
        (x_depth, y_depth) => {
            let missing = [(&x_chr, x_depth), (&y_chr, y_depth)]
                .into_iter()
                .filter(|(_, depth)| depth.is_none())
                .map(|(chr, _)| chr.clone())
                .collect();
            return Err(SexCheckError::ChromosomeNotFound {
                missing,
                available: table.chroms().map(String::from).collect(),
            });
        }
    };

    let autosome_depth = autosome_depth(table, &x_chr, &y_chr)?;

    let ratios = CoverageRatios {
        x_ratio: x_depth / autosome_depth,
        y_ratio: y_depth / autosome_depth,
    };
    if !(ratios.x_ratio.is_finite() && ratios.y_ratio.is_finite()) {
        return Err(SexCheckError::DegenerateInput(format!(
            "{}/autosome or {}/autosome ratio is out of range",
            x_chr, y_chr
        )));
    }
    let classification = classify(&ratios, thresholds);

    debug!(
        "{}/autosome = {:.4}, {}/autosome = {:.4} -> {} ({})",
        x_chr,
        ratios.x_ratio,
        y_chr,
        ratios.y_ratio,
        classification.predicted_sex,
        classification.confidence
    );

    Ok(SexEstimate {
        x_chr,
        y_chr,
        x_depth,
        y_depth,
        autosome_depth,
        ratios,
        classification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use depthqc_core::{ChromosomeSummary, TableError};
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::classifier::{Confidence, PredictedSex};

    fn get_test_path(sample: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/sexcheck")
            .join(sample)
            .join(format!("{}.mosdepth.summary.txt", sample))
    }

    fn table(rows: &[(&str, f64)]) -> ChromosomeTable {
        ChromosomeTable::from_records(
            rows.iter()
                .map(|&(chrom, depth)| ChromosomeSummary::new(chrom, depth))
                .collect(),
        )
        .unwrap()
    }

    #[rstest]
    fn test_female_sample() {
        let summary = table(&[("chr1", 30.0), ("chrX", 30.0), ("chrY", 2.0)]);
        let estimate = estimate_sex(&summary, ChromNaming::Chr, &SexThresholds::default()).unwrap();

        assert_eq!(estimate.autosome_depth, 30.0);
        assert_eq!(estimate.ratios.x_ratio, 1.0);
        assert!((estimate.ratios.y_ratio - 0.0667).abs() < 1e-4);
        assert_eq!(estimate.classification.predicted_sex, PredictedSex::Female);
        assert_eq!(estimate.classification.confidence, Confidence::High);
    }

    #[rstest]
    #[case("NA06994", ChromNaming::Chr, PredictedSex::Female, 30.0)]
    #[case("HG00096", ChromNaming::Chr, PredictedSex::Male, 30.0)]
    #[case("BARE", ChromNaming::Bare, PredictedSex::Male, 30.0)]
    fn test_from_summary_file(
        #[case] sample: &str,
        #[case] naming: ChromNaming,
        #[case] expected: PredictedSex,
        #[case] autosomes: f64,
    ) {
        let summary = ChromosomeTable::try_from(get_test_path(sample).as_path()).unwrap();
        let estimate = estimate_sex(&summary, naming, &SexThresholds::default()).unwrap();

        assert_eq!(estimate.autosome_depth, autosomes);
        assert_eq!(estimate.classification.predicted_sex, expected);
    }

    #[rstest]
    fn test_total_row_is_not_an_autosome() {
        let summary = table(&[
            ("chr1", 20.0),
            ("chr2", 40.0),
            ("chrX", 15.0),
            ("chrY", 15.0),
            ("total", 1000.0),
            ("chr1_region", 500.0),
        ]);
        assert_eq!(autosome_depth(&summary, "chrX", "chrY").unwrap(), 30.0);
    }

    #[rstest]
    fn test_missing_y_chromosome() {
        let summary = ChromosomeTable::try_from(get_test_path("NOCHRY").as_path()).unwrap();
        let result = estimate_sex(&summary, ChromNaming::Chr, &SexThresholds::default());

        match result {
            Err(SexCheckError::ChromosomeNotFound { missing, available }) => {
                assert_eq!(missing, vec!["chrY".to_string()]);
                assert_eq!(available, vec!["chr1", "chr2", "chrX", "total"]);
            }
            other => panic!("expected ChromosomeNotFound, got {:?}", other),
        }
    }

    #[rstest]
    fn test_wrong_naming_convention_reports_both() {
        let summary = table(&[("1", 30.0), ("X", 30.0), ("Y", 0.0)]);
        let err = estimate_sex(&summary, ChromNaming::Chr, &SexThresholds::default()).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("chrX, chrY"), "{}", message);
        assert!(message.contains("1, X, Y"), "{}", message);
    }

    #[rstest]
    #[case(&[("chrX", 30.0), ("chrY", 2.0)])]
    #[case(&[("chrX", 30.0), ("chrY", 2.0), ("total", 16.0)])]
    #[case(&[("chr1", 0.0), ("chr2", 0.0), ("chrX", 30.0), ("chrY", 2.0)])]
    #[case(&[("chr1", 1e308), ("chr2", 1e308), ("chrX", 1e308), ("chrY", 1.0)])]
    #[case(&[("chr1", 1e-310), ("chrX", 1e308), ("chrY", 1.0)])]
    fn test_degenerate_autosomes(#[case] rows: &[(&str, f64)]) {
        let result = estimate_sex(&table(rows), ChromNaming::Chr, &SexThresholds::default());
        assert!(matches!(result, Err(SexCheckError::DegenerateInput(_))));
    }

    #[rstest]
    fn test_invalid_thresholds_are_rejected_before_lookup() {
        let thresholds = SexThresholds {
            x_male_low: f64::NAN,
            ..SexThresholds::default()
        };
        let result = estimate_sex(&table(&[]), ChromNaming::Chr, &thresholds);
        assert!(matches!(result, Err(SexCheckError::InvalidThresholds(_))));
    }

    #[rstest]
    fn test_custom_thresholds_change_the_call() {
        let summary = table(&[("chr1", 30.0), ("chrX", 27.0), ("chrY", 2.0)]);

        let default = estimate_sex(&summary, ChromNaming::Chr, &SexThresholds::default()).unwrap();
        assert_eq!(default.classification.predicted_sex, PredictedSex::Female);

        let strict = SexThresholds {
            x_female_high: 0.95,
            ..SexThresholds::default()
        };
        let strict = estimate_sex(&summary, ChromNaming::Chr, &strict).unwrap();
        assert_eq!(strict.classification.predicted_sex, PredictedSex::LikelyMale);
    }

    #[rstest]
    fn test_table_errors_convert() {
        let err: SexCheckError = TableError::InputNotFound(PathBuf::from("x.txt")).into();
        assert!(matches!(err, SexCheckError::Table(_)));
    }
}
