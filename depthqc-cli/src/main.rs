use anyhow::Result;

use depthqc_cli::{build_parser, run};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = build_parser().get_matches();
    run(&matches)
}
