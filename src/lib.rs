// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! # eomp-ets - EOMP Executable Test Suite
//!
//! `eomp-ets` checks EOMP (Earth Observation Metadata Profile) records
//! describing processing offerings against the authoritative EOMP JSON Schema
//! and any additional conformance rules, and produces a standard ETS report.
//!
//! ## Features
//!
//! - **Deterministic runs** - schema validation first, then domain rules in identifier order
//! - **Complete diagnostics** - every schema violation is reported with its location
//! - **Fault isolation** - a broken rule fails on its own without hiding other results
//! - **Offline validation** - the schema bundle is synchronised once and cached
//!
//! ## Quick Start
//!
//! ```bash
//! # Cache the schema
//! eomp bundle sync
//!
//! # Validate a record
//! eomp record validate record.json
//! ```

pub mod bundle;
pub mod cli;
pub mod config;
pub mod errors;
pub mod ets;
pub mod process;
pub mod record;
pub mod utils;

// Re-export commonly used types
pub use errors::{EompError, EompResult};
pub use record::Record;

// Re-export ETS types
pub use ets::{ConformanceEngine, ConformanceReport, Outcome, RuleRegistry, StatusCode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
