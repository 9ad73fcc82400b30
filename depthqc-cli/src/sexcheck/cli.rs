use clap::{Arg, Command, arg, value_parser};

use crate::config::CONFIG_ARG;

pub const SEXCHECK_CMD: &str = "sexcheck";

pub const DEFAULT_INPUT_DIR: &str = "intermediate/coverage/";
pub const DEFAULT_OUTDIR: &str = "results/sex_inference/";

pub const X_FEMALE_HIGH: &str = "x-female-high";
pub const Y_FEMALE_LOW: &str = "y-female-low";
pub const X_MALE_LOW: &str = "x-male-low";
pub const Y_MALE_HIGH: &str = "y-male-high";
pub const CHR_FORMAT: &str = "chr-format";

fn ratio_arg(id: &'static str, alias: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .alias(alias)
        .required(false)
        .value_parser(value_parser!(f64))
        .help(help)
}

pub fn create_sexcheck_cli() -> Command {
    Command::new(SEXCHECK_CMD)
        .about("Estimate biological sex from X/autosome and Y/autosome depth in a mosdepth summary.")
        .arg(
            arg!(-s --sample <SAMPLE>)
                .required(true)
                .help("Sample name"),
        )
        .arg(
            Arg::new("input-dir")
                .short('i')
                .long("input-dir")
                .default_value(DEFAULT_INPUT_DIR)
                .help("Directory holding <SAMPLE>/<SAMPLE>.mosdepth.summary.txt"),
        )
        .arg(
            Arg::new("outdir")
                .short('o')
                .long("outdir")
                .alias("output-dir")
                .default_value(DEFAULT_OUTDIR)
                .help("Directory for <SAMPLE>_sex_estimate.txt (created if missing)"),
        )
        .arg(
            arg!(--input <INPUT>)
                .required(false)
                .help("Path to the mosdepth summary; overrides --input-dir"),
        )
        .arg(ratio_arg(
            X_FEMALE_HIGH,
            "x_female_high",
            "Upper threshold for X/autosome ratio (female) [default: 0.8]",
        ))
        .arg(ratio_arg(
            Y_FEMALE_LOW,
            "y_female_low",
            "Lower threshold for Y/autosome ratio (female) [default: 0.2]",
        ))
        .arg(ratio_arg(
            X_MALE_LOW,
            "x_male_low",
            "Lower threshold for X/autosome ratio (male) [default: 0.6]",
        ))
        .arg(ratio_arg(
            Y_MALE_HIGH,
            "y_male_high",
            "Upper threshold for Y/autosome ratio (male) [default: 0.2]",
        ))
        .arg(
            Arg::new(CHR_FORMAT)
                .long(CHR_FORMAT)
                .alias("chr_format")
                .required(false)
                .help("Chromosome name prefix in the summary: 'chr', or 'none'/'' for X and Y [default: chr]"),
        )
        .arg(
            Arg::new(CONFIG_ARG)
                .long(CONFIG_ARG)
                .required(false)
                .help("TOML config file with a [sexcheck] section"),
        )
}
