// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Per-requirement outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status code of a single requirement run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusCode {
    Passed,
    Failed,
    Skipped,
    Warnings,
}

impl StatusCode {
    /// All codes, in report order
    pub const ALL: [StatusCode; 4] = [
        StatusCode::Passed,
        StatusCode::Failed,
        StatusCode::Skipped,
        StatusCode::Warnings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
            Self::Warnings => "WARNINGS",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detailed violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// JSON Pointer into the record
    pub location: String,

    /// Human-readable constraint violation
    pub message: String,
}

impl ErrorEntry {
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Result of running one requirement against one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Requirement identifier (URI)
    pub id: String,

    /// Status code
    pub code: StatusCode,

    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Detailed errors, when there are any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorEntry>>,
}

impl Outcome {
    pub fn passed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: StatusCode::Passed,
            message: None,
            errors: None,
        }
    }

    /// A failure; an empty error list is left out of the report
    pub fn failed(id: impl Into<String>, message: impl Into<String>, errors: Vec<ErrorEntry>) -> Self {
        Self {
            id: id.into(),
            code: StatusCode::Failed,
            message: Some(message.into()),
            errors: if errors.is_empty() { None } else { Some(errors) },
        }
    }

    pub fn skipped(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: StatusCode::Skipped,
            message: Some(reason.into()),
            errors: None,
        }
    }

    pub fn warnings(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: StatusCode::Warnings,
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.code == StatusCode::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passed_outcome_has_no_optional_fields() {
        let value = serde_json::to_value(Outcome::passed("http://x/validation")).unwrap();
        assert_eq!(value, json!({"id": "http://x/validation", "code": "PASSED"}));
    }

    #[test]
    fn test_failed_outcome_serializes_errors() {
        let outcome = Outcome::failed(
            "http://x/validation",
            "1 error(s)",
            vec![ErrorEntry::new("/id", "\"id\" is a required property")],
        );
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["code"], "FAILED");
        assert_eq!(value["message"], "1 error(s)");
        assert_eq!(value["errors"][0]["location"], "/id");
        assert!(outcome.is_failed());
    }

    #[test]
    fn test_failed_without_entries_omits_errors() {
        let outcome = Outcome::failed("http://x/rule", "rule fault: boom", vec![]);
        assert!(outcome.errors.is_none());
    }

    #[test]
    fn test_status_code_wire_names() {
        for code in StatusCode::ALL {
            let value = serde_json::to_value(code).unwrap();
            assert_eq!(value, json!(code.as_str()));
        }
    }
}
