//! Insert or refresh the release and build status badges of a README.
//!
//! The badges point at the GitHub repository named after the current
//! directory:
//! - a release badge linking to the latest release
//! - a build status badge linking to the `main.yml` workflow runs

use anyhow::Result;
use clap::Parser;
use update_badges::commands;
use update_badges::commands::UpdateBadgesArgs;

#[derive(Parser, Debug)]
#[command(
    name = "update-badges",
    version,
    about = "Update badges in the repo README.md"
)]
struct Cli {
    #[command(flatten)]
    args: UpdateBadgesArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::update_badges(cli.args)
}
