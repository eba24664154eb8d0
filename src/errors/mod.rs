// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Error types
//!
//! Only a handful of these abort a conformance run. Everything a single
//! requirement can get wrong is reported inside the ETS report instead.

mod recovery;

pub use recovery::RecoverySuggestion;

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::ets::Outcome;

/// Result type for eomp-ets operations
pub type EompResult<T> = Result<T, EompError>;

/// Main error type for eomp-ets
#[derive(Error, Debug, Diagnostic)]
pub enum EompError {
    // ─────────────────────────────────────────────────────────────────────────
    // Run Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("EOMP schema unavailable: {reason}")]
    #[diagnostic(
        code(eomp::schema_unavailable),
        help("Run 'eomp bundle sync' to cache the EOMP schema")
    )]
    SchemaUnavailable { reason: String },

    #[error("Invalid EOMP record: {} requirement(s) failed", .failures.len())]
    #[diagnostic(code(eomp::suite_failed))]
    SuiteFailed { failures: Vec<Outcome> },

    // ─────────────────────────────────────────────────────────────────────────
    // Record Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Malformed record: {reason}")]
    #[diagnostic(
        code(eomp::malformed_record),
        help("EOMP records must be JSON objects")
    )]
    MalformedRecord { reason: String },

    #[error("Record has no 'id' property")]
    #[diagnostic(
        code(eomp::missing_record_id),
        help("Every EOMP record carries a unique 'id' at the top level")
    )]
    MissingRecordId,

    #[error("Missing process input '{name}'")]
    #[diagnostic(code(eomp::missing_input))]
    MissingInput { name: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Registry Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Requirement '{id}' is already registered")]
    #[diagnostic(code(eomp::duplicate_requirement))]
    DuplicateRequirement { id: String },

    #[error("Requirement code '{code}' is reserved")]
    #[diagnostic(
        code(eomp::reserved_requirement),
        help("Schema validation always runs first and cannot be registered as a domain rule")
    )]
    ReservedRequirement { code: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Network / File Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Failed to fetch '{url}': {error}")]
    #[diagnostic(code(eomp::fetch_failed))]
    Fetch { url: String, error: String },

    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(eomp::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(eomp::file_write_error))]
    FileWriteError { path: PathBuf, error: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(eomp::config_error))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(eomp::io_error))]
    Io { message: String },

    #[error("JSON parsing error: {message}")]
    #[diagnostic(code(eomp::json_error))]
    Json { message: String },

    #[error("YAML parsing error: {message}")]
    #[diagnostic(code(eomp::yaml_error))]
    Yaml { message: String },

    #[error("TOML parsing error: {message}")]
    #[diagnostic(code(eomp::toml_error))]
    Toml { message: String },
}

impl From<std::io::Error> for EompError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl From<serde_json::Error> for EompError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<serde_yaml::Error> for EompError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<toml::de::Error> for EompError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml { message: e.to_string() }
    }
}

impl From<reqwest::Error> for EompError {
    fn from(e: reqwest::Error) -> Self {
        Self::Fetch {
            url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            error: e.to_string(),
        }
    }
}

impl EompError {
    /// Schema missing from the local bundle
    pub fn schema_missing(path: &std::path::Path) -> Self {
        Self::SchemaUnavailable {
            reason: format!("no cached schema at {}", path.display()),
        }
    }

    /// Failed outcomes carried by a `SuiteFailed` error
    pub fn failures(&self) -> &[Outcome] {
        match self {
            Self::SuiteFailed { failures } => failures,
            _ => &[],
        }
    }

    /// Whether this error aborted a run before any report was produced
    pub fn is_run_abort(&self) -> bool {
        matches!(self, Self::SchemaUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ets::{Outcome, StatusCode};

    #[test]
    fn test_suite_failed_message_counts_failures() {
        let err = EompError::SuiteFailed {
            failures: vec![Outcome::failed("http://x/a", "1 error(s)", vec![])],
        };
        assert_eq!(err.to_string(), "Invalid EOMP record: 1 requirement(s) failed");
        assert_eq!(err.failures().len(), 1);
        assert_eq!(err.failures()[0].code, StatusCode::Failed);
    }

    #[test]
    fn test_schema_missing_is_run_abort() {
        let err = EompError::schema_missing(std::path::Path::new("/tmp/eomp/eomp-bundled.json"));
        assert!(err.is_run_abort());
        assert!(err.to_string().contains("eomp-bundled.json"));
        assert!(!EompError::MissingRecordId.is_run_abort());
    }
}
