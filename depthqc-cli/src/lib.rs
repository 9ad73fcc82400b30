pub mod config;
pub mod coverage;
pub mod sexcheck;
pub mod utils;

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "depthqc";
    pub const BIN_NAME: &str = "depthqc";
}

pub fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Coverage breadth statistics and sex estimation from mosdepth depth summaries.")
        .subcommand_required(true)
        .subcommand(coverage::cli::create_coverage_cli())
        .subcommand(sexcheck::cli::create_sexcheck_cli())
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        //
        // COVERAGE STATISTICS
        //
        Some((coverage::cli::COVERAGE_CMD, matches)) => {
            coverage::handlers::run_coverage(matches)?;
        }

        //
        // SEX ESTIMATION
        //
        Some((sexcheck::cli::SEXCHECK_CMD, matches)) => {
            sexcheck::handlers::run_sexcheck(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
