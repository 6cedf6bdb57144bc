//! count-files — tally every file under a directory by extension and by
//! top-level directory.
//!
//! Thin binary entry point. All logic lives in the `dirtally-core`
//! and `dirtally-cli` crates.

use clap::Parser;
use dirtally_cli::args::CountFilesCli;

fn main() -> anyhow::Result<()> {
    let cli = CountFilesCli::parse();
    dirtally_cli::logging::init(cli.common.verbose);

    tracing::debug!("count-files starting");

    dirtally_cli::run_count_files(&cli.common)
}
