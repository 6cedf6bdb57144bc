//! count-media — count image and video files under a directory, with
//! per-type, per-directory and per-file breakdowns.
//!
//! Thin binary entry point. All logic lives in the `dirtally-core`
//! and `dirtally-cli` crates.

use clap::Parser;
use dirtally_cli::args::CountMediaCli;

fn main() -> anyhow::Result<()> {
    let cli = CountMediaCli::parse();
    dirtally_cli::logging::init(cli.common.verbose);

    tracing::debug!("count-media starting");

    dirtally_cli::run_count_media(&cli.common)
}
