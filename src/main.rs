//! Readyscope - AR/VR developer readiness assessment CLI
//!
//! A local-first terminal tool: take the WISCAR readiness assessment,
//! score it, and review the results. Nothing leaves your machine.

use anyhow::Result;
use clap::Parser;
use readyscope::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI args first so --log-level can seed the filter
    let cli = cli::Cli::parse();

    // Initialize logging; RUST_LOG overrides the flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("readyscope={}", cli.log_level)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
