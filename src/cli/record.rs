// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Record command - run the ETS against a record
//!
//! The report goes to stdout; progress goes to stderr so the output can be
//! piped straight into other JSON tooling.

use colored::Colorize;
use miette::Result;
use std::sync::Arc;

use super::RecordAction;
use crate::bundle::FilesystemSchemaStore;
use crate::config::Settings;
use crate::errors::RecoverySuggestion;
use crate::ets::{ConformanceEngine, ConformanceReport};
use crate::record::{self, Record};

/// Run the record command; returns the process exit code
pub async fn run(action: RecordAction, settings: Settings, verbose: bool) -> Result<i32> {
    match action {
        RecordAction::Validate { file_or_url } => validate(&file_or_url, settings, verbose).await,
    }
}

async fn validate(file_or_url: &str, settings: Settings, verbose: bool) -> Result<i32> {
    eprintln!("Opening {}", file_or_url);
    let content = record::load_source(file_or_url).await?;

    eprintln!("Validating {}", file_or_url);
    let record = Record::parse(&content)?;
    eprintln!("Detected EOMP record");

    let store = FilesystemSchemaStore::new(&settings);
    let mut engine = ConformanceEngine::new(Arc::new(store));

    let report = match engine.run(&record) {
        Ok(report) => report,
        Err(e) => {
            if verbose {
                if let Some(suggestion) = RecoverySuggestion::for_error(&e) {
                    eprintln!("{}", suggestion);
                }
            }
            return Err(e.into());
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&report)
            .map_err(|e| miette::miette!("Failed to serialize report: {}", e))?
    );

    if verbose {
        print_summary(&report);
    }

    Ok(exit_code(&report))
}

/// Exit code of a validation run: the FAILED count
pub fn exit_code(report: &ConformanceReport) -> i32 {
    i32::try_from(report.summary.failed).unwrap_or(i32::MAX)
}

fn print_summary(report: &ConformanceReport) {
    eprintln!();
    for outcome in &report.tests {
        let icon = match outcome.code {
            crate::ets::StatusCode::Passed => "✓".green(),
            crate::ets::StatusCode::Failed => "✗".red(),
            crate::ets::StatusCode::Skipped => "○".dimmed(),
            crate::ets::StatusCode::Warnings => "⚠".yellow(),
        };
        eprintln!("  {} {}", icon, outcome.id);
        if let Some(ref errors) = outcome.errors {
            for error in errors {
                eprintln!("      {}", error.to_string().dimmed());
            }
        }
    }
    eprintln!();

    let line = format!(
        "{} passed, {} failed, {} skipped, {} warnings",
        report.summary.passed,
        report.summary.failed,
        report.summary.skipped,
        report.summary.warnings
    );
    if report.is_passing() {
        eprintln!("{}", line.green().bold());
    } else {
        eprintln!("{}", line.red().bold());
    }
}
