use clap::{Arg, Command, arg, value_parser};

use crate::config::CONFIG_ARG;

pub const COVERAGE_CMD: &str = "coverage";

pub const DEFAULT_INPUT_DIR: &str = "intermediate/coverage";
pub const DEFAULT_OUTPUT_DIR: &str = "results/coverage";

pub fn create_coverage_cli() -> Command {
    Command::new(COVERAGE_CMD)
        .about("Compute mean depth and breadth of coverage from a mosdepth regions file.")
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
                .help("Directory holding <SAMPLE>.regions.bed.gz"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .default_value(DEFAULT_OUTPUT_DIR)
                .help("Directory for <SAMPLE>.coverage_stats.txt (created if missing)"),
        )
        .arg(
            arg!(--input <INPUT>)
                .required(false)
                .help("Path to the regions file; overrides --input-dir"),
        )
        .arg(
            arg!(--thresholds <THRESHOLDS>)
                .required(false)
                .help("Comma separated depth thresholds [default: 10,30]"),
        )
        .arg(
            Arg::new("depth-column")
                .long("depth-column")
                .required(false)
                .value_parser(value_parser!(usize))
                .help("0-based column holding the mean depth [default: last column]"),
        )
        .arg(
            Arg::new(CONFIG_ARG)
                .long(CONFIG_ARG)
                .required(false)
                .help("TOML config file with a [coverage] section"),
        )
}
