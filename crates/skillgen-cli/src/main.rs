//! Skillgen CLI
//!
//! Generates skills from documentation.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;

use skillgen_cli::logging::init_logging;
use skillgen_cli::{Cli, Pipeline, SkillgenConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config =
        SkillgenConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_cli(&cli);
    tracing::debug!(?config, "resolved configuration");

    let summary = Pipeline::new(config)
        .run()
        .context("skill generation failed")?;
    println!("{summary}");

    Ok(())
}
