// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for eomp.

pub mod bundle;
pub mod record;
pub mod requirements;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Settings;

/// EOMP Executable Test Suite
///
/// Validate EOMP records against the EOMP schema and conformance rules.
#[derive(Parser, Debug)]
#[clap(
    name = "eomp",
    version,
    about = "Executable Test Suite for EOMP records",
    long_about = None,
    after_help = "Examples:\n\
        eomp bundle sync                      Cache the EOMP schema\n\
        eomp record validate record.json      Validate a local record\n\
        eomp record validate https://...      Validate a remote record\n\
        eomp requirements                     List requirements in run order\n\n\
        See 'eomp <command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (YAML or TOML)
    #[clap(long, global = true, env = "EOMP_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the cached schema bundle
    #[clap(long, global = true, env = "EOMP_USER_DIR", value_name = "DIR")]
    pub user_dir: Option<PathBuf>,

    /// Where 'bundle sync' fetches the schema from (URL or path)
    #[clap(long, global = true, env = "EOMP_SCHEMA_URL", value_name = "URL")]
    pub schema_url: Option<String>,
}

impl Cli {
    /// Resolve settings from the config file and overrides
    pub fn settings(&self) -> crate::EompResult<Settings> {
        Settings::resolve(
            self.config.as_deref(),
            self.user_dir.clone(),
            self.schema_url.clone(),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// EOMP record utilities
    Record {
        #[clap(subcommand)]
        action: RecordAction,
    },

    /// Schema bundle management
    Bundle {
        #[clap(subcommand)]
        action: BundleAction,
    },

    /// Show the requirements of the test suite
    Requirements {
        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Record actions
#[derive(Subcommand, Debug, Clone)]
pub enum RecordAction {
    /// Validate an EOMP record against the specification
    ///
    /// Prints the ETS report as JSON; the exit code is the number of failed
    /// requirements.
    Validate {
        /// Record file or http(s) URL
        file_or_url: String,
    },
}

/// Bundle actions
#[derive(Subcommand, Debug, Clone)]
pub enum BundleAction {
    /// Sync the schema bundle
    Sync,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
