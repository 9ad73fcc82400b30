use std::str::FromStr;

use crate::errors::SexCheckError;

pub const DEFAULT_X_FEMALE_HIGH: f64 = 0.8;
pub const DEFAULT_Y_FEMALE_LOW: f64 = 0.2;
pub const DEFAULT_X_MALE_LOW: f64 = 0.6;
pub const DEFAULT_Y_MALE_HIGH: f64 = 0.2;

///
/// Ratio thresholds for the sex decision table. All ratios are relative to the
/// mean autosome depth.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexThresholds {
    /// X/autosome ratio above which a sample looks female
    pub x_female_high: f64,
    /// Y/autosome ratio below which a sample looks female
    pub y_female_low: f64,
    /// X/autosome ratio below which a sample looks male
    pub x_male_low: f64,
    /// Y/autosome ratio above which a sample looks male
    pub y_male_high: f64,
}

impl Default for SexThresholds {
    fn default() -> Self {
        SexThresholds {
            x_female_high: DEFAULT_X_FEMALE_HIGH,
            y_female_low: DEFAULT_Y_FEMALE_LOW,
            x_male_low: DEFAULT_X_MALE_LOW,
            y_male_high: DEFAULT_Y_MALE_HIGH,
        }
    }
}

impl SexThresholds {
    ///
    /// Check that every threshold is a finite, non-negative ratio.
    ///
    pub fn validate(&self) -> Result<(), SexCheckError> {
        let named = [
            ("x_female_high", self.x_female_high),
            ("y_female_low", self.y_female_low),
            ("x_male_low", self.x_male_low),
            ("y_male_high", self.y_male_high),
        ];

        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(SexCheckError::InvalidThresholds(format!(
                    "{} must be a finite, non-negative ratio, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

///
/// Chromosome naming convention of the reference the depth summary was computed on.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromNaming {
    /// UCSC style: `chrX`, `chrY`
    #[default]
    Chr,
    /// Ensembl/NCBI style: `X`, `Y`
    Bare,
}

impl ChromNaming {
    pub fn prefix(&self) -> &'static str {
        match self {
            ChromNaming::Chr => "chr",
            ChromNaming::Bare => "",
        }
    }

    pub fn x_chr(&self) -> String {
        format!("{}X", self.prefix())
    }

    pub fn y_chr(&self) -> String {
        format!("{}Y", self.prefix())
    }
}

impl FromStr for ChromNaming {
    type Err = SexCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "chr" => Ok(ChromNaming::Chr),
            "" | "none" => Ok(ChromNaming::Bare),
            other => Err(SexCheckError::InvalidChromNaming(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_default_thresholds_are_valid() {
        let thresholds = SexThresholds::default();
        assert!(thresholds.validate().is_ok());
        assert_eq!(thresholds.x_female_high, 0.8);
        assert_eq!(thresholds.x_male_low, 0.6);
    }

    #[rstest]
    #[case(SexThresholds { x_female_high: -0.1, ..Default::default() }, "x_female_high")]
    #[case(SexThresholds { y_male_high: f64::NAN, ..Default::default() }, "y_male_high")]
    #[case(SexThresholds { y_female_low: f64::INFINITY, ..Default::default() }, "y_female_low")]
    fn test_invalid_thresholds(#[case] thresholds: SexThresholds, #[case] name: &str) {
        match thresholds.validate() {
            Err(SexCheckError::InvalidThresholds(msg)) => assert!(msg.contains(name)),
            other => panic!("expected InvalidThresholds, got {:?}", other),
        }
    }

    #[rstest]
    #[case("chr", ChromNaming::Chr, "chrX", "chrY")]
    #[case("", ChromNaming::Bare, "X", "Y")]
    #[case("none", ChromNaming::Bare, "X", "Y")]
    fn test_chrom_naming(
        #[case] input: &str,
        #[case] expected: ChromNaming,
        #[case] x_chr: &str,
        #[case] y_chr: &str,
    ) {
        let naming: ChromNaming = input.parse().unwrap();
        assert_eq!(naming, expected);
        assert_eq!(naming.x_chr(), x_chr);
        assert_eq!(naming.y_chr(), y_chr);
    }

    #[rstest]
    fn test_unknown_chrom_naming() {
        assert!(matches!(
            "Chr".parse::<ChromNaming>(),
            Err(SexCheckError::InvalidChromNaming(_))
        ));
    }
}
