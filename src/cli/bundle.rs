// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Bundle command - cache the EOMP schema locally

use colored::Colorize;
use miette::Result;

use super::BundleAction;
use crate::bundle::{FilesystemSchemaStore, SchemaStore};
use crate::config::Settings;
use crate::utils::create_spinner;

/// Run the bundle command
pub async fn run(action: BundleAction, settings: Settings, verbose: bool) -> Result<()> {
    match action {
        BundleAction::Sync => sync(settings, verbose).await,
    }
}

async fn sync(settings: Settings, verbose: bool) -> Result<()> {
    let store = FilesystemSchemaStore::new(&settings);

    let spinner = create_spinner(&format!("Downloading EOMP schema from {}", store.source()));
    let result = store.sync().await;
    spinner.finish_and_clear();

    let summary = result?;

    if summary.changed {
        println!(
            "  {} Schema cached at {}",
            "✓".green(),
            summary.path.display()
        );
    } else {
        println!(
            "  {} Schema at {} already up to date",
            "✓".green(),
            summary.path.display()
        );
    }

    if verbose {
        println!("    {} bytes", summary.size);
        println!("    blake3 {}", summary.digest.dimmed());
    }

    Ok(())
}
