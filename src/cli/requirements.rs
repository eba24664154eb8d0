// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Requirements command - list requirements in execution order

use colored::Colorize;
use miette::Result;

use super::OutputFormat;
use crate::ets::{Requirement, RuleRegistry};
use crate::utils::print_header;

/// Run the requirements command
pub async fn run(format: OutputFormat, _verbose: bool) -> Result<()> {
    let requirements = RuleRegistry::new().list_requirements();

    match format {
        OutputFormat::Text => print_requirements(&requirements),
        OutputFormat::Json => print_requirements_json(&requirements)?,
    }

    Ok(())
}

fn print_requirements(requirements: &[Requirement]) {
    println!();
    print_header("EOMP ETS Requirements");
    println!();

    for (index, req) in requirements.iter().enumerate() {
        let kind = if req.is_schema_validation() {
            "schema".cyan()
        } else {
            "domain".yellow()
        };
        println!("  {}. {} [{}]", index + 1, req.id.bold(), kind);

        let description = req.description();
        if !description.is_empty() {
            println!("     {}", description.dimmed());
        }
    }

    println!();
}

fn print_requirements_json(requirements: &[Requirement]) -> Result<()> {
    let json: Vec<_> = requirements
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "kind": if r.is_schema_validation() { "schema" } else { "domain" },
                "description": r.description(),
            })
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&json)
            .map_err(|e| miette::miette!("Failed to serialize JSON: {}", e))?
    );

    Ok(())
}
