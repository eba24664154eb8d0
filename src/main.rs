// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! eomp - EOMP Executable Test Suite
//!
//! Validate EOMP records and manage the cached schema bundle.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eomp_ets::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "eomp_ets=debug"
    } else {
        "eomp_ets=warn"
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let settings = cli.settings()?;

    // Dispatch to command handlers
    match cli.command {
        Commands::Record { action } => {
            let code = eomp_ets::cli::record::run(action, settings, cli.verbose).await?;
            std::process::exit(code);
        }
        Commands::Bundle { action } => {
            eomp_ets::cli::bundle::run(action, settings, cli.verbose).await
        }
        Commands::Requirements { format } => {
            eomp_ets::cli::requirements::run(format, cli.verbose).await
        }
    }
}
