/// Command-line arguments shared by both tools.
use anyhow::{anyhow, Context};
use clap::{Args, Parser};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Directory to scan [default: the directory containing this executable]
    pub root: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Do not show the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// The directory to walk: the explicit argument, or the executable's directory.
    pub fn resolve_root(&self) -> anyhow::Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => executable_dir(),
        }
    }
}

fn executable_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("executable has no parent directory: {}", exe.display()))
}

#[derive(Parser, Debug)]
#[command(
    name = "count-files",
    version,
    about = "Count every file under a directory by extension and top-level directory"
)]
pub struct CountFilesCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "count-media",
    version,
    about = "Count image and video files under a directory"
)]
pub struct CountMediaCli {
    #[command(flatten)]
    pub common: CommonArgs,
}
