use std::fs::read_to_string;
use std::path::Path;

use clap::ArgMatches;
use serde::Deserialize;
use thiserror::Error;

use depthqc_sexcheck::SexThresholds;

pub const CONFIG_ARG: &str = "config";

///
/// Optional TOML configuration shared by both subcommands. Every key may be left out;
/// command line flags take precedence over it, and built-in defaults fill the rest.
///
/// ```toml
/// [coverage]
/// thresholds = [10, 30]
///
/// [sexcheck]
/// x_female_high = 0.8
/// chr_format = "chr"
/// ```
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DepthQcConfig {
    #[serde(default)]
    pub coverage: CoverageConfig,
    #[serde(default)]
    pub sexcheck: SexCheckConfig,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CoverageConfig {
    pub thresholds: Option<Vec<f64>>,
    pub depth_column: Option<usize>,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SexCheckConfig {
    pub x_female_high: Option<f64>,
    pub y_female_low: Option<f64>,
    pub x_male_low: Option<f64>,
    pub y_male_high: Option<f64>,
    pub chr_format: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can't read config file {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("Invalid config file {0}: {1}")]
    Toml(String, #[source] toml::de::Error),
}

impl TryFrom<&Path> for DepthQcConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let label = path.display().to_string();
        let toml_str = read_to_string(path).map_err(|e| ConfigError::Io(label.clone(), e))?;
        let config = toml::from_str(&toml_str).map_err(|e| ConfigError::Toml(label, e))?;
        Ok(config)
    }
}

impl DepthQcConfig {
    ///
    /// Load the file named by `--config`, or an empty config when the flag is absent.
    ///
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        match matches.get_one::<String>(CONFIG_ARG) {
            Some(path) => DepthQcConfig::try_from(Path::new(path)),
            None => Ok(DepthQcConfig::default()),
        }
    }
}

impl SexCheckConfig {
    ///
    /// Thresholds from this config, falling back to `base` for every key that is not set.
    ///
    pub fn thresholds_over(&self, base: SexThresholds) -> SexThresholds {
        SexThresholds {
            x_female_high: self.x_female_high.unwrap_or(base.x_female_high),
            y_female_low: self.y_female_low.unwrap_or(base.y_female_low),
            x_male_low: self.x_male_low.unwrap_or(base.x_male_low),
            y_male_high: self.y_male_high.unwrap_or(base.y_male_high),
        }
    }
}
