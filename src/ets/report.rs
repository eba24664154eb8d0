// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! ETS report assembly

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::outcome::{Outcome, StatusCode};

/// Fixed report type tag
pub const REPORT_TYPE: &str = "ets";

/// Timestamp format of `datetime`
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Count of outcomes per status code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "PASSED")]
    pub passed: usize,
    #[serde(rename = "FAILED")]
    pub failed: usize,
    #[serde(rename = "SKIPPED")]
    pub skipped: usize,
    #[serde(rename = "WARNINGS")]
    pub warnings: usize,
}

impl Summary {
    /// Count outcomes in a single pass
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            *summary.slot(outcome.code) += 1;
        }
        summary
    }

    pub fn get(&self, code: StatusCode) -> usize {
        match code {
            StatusCode::Passed => self.passed,
            StatusCode::Failed => self.failed,
            StatusCode::Skipped => self.skipped,
            StatusCode::Warnings => self.warnings,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.warnings
    }

    fn slot(&mut self, code: StatusCode) -> &mut usize {
        match code {
            StatusCode::Passed => &mut self.passed,
            StatusCode::Failed => &mut self.failed,
            StatusCode::Skipped => &mut self.skipped,
            StatusCode::Warnings => &mut self.warnings,
        }
    }
}

/// Executable Test Suite report for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Unique per run
    pub id: String,
    pub report_type: String,
    pub summary: Summary,
    pub generated_by: String,
    /// Outcomes in execution order
    pub tests: Vec<Outcome>,
    /// UTC, second precision
    pub datetime: String,
    /// The record's `id`, copied verbatim
    pub metadata_id: Value,
}

impl ConformanceReport {
    /// Outcomes with FAILED status
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.tests.iter().filter(|o| o.is_failed())
    }

    pub fn is_passing(&self) -> bool {
        self.summary.failed == 0
    }
}

/// Builds reports from completed outcome lists
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    generated_by: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            generated_by: format!(
                "{} {} ({})",
                env!("CARGO_PKG_NAME"),
                crate::VERSION,
                env!("CARGO_PKG_REPOSITORY")
            ),
        }
    }

    /// Override the provenance string
    pub fn with_generated_by(generated_by: impl Into<String>) -> Self {
        Self {
            generated_by: generated_by.into(),
        }
    }

    pub fn build(&self, outcomes: Vec<Outcome>, record_id: &Value) -> ConformanceReport {
        self.build_at(outcomes, record_id, Utc::now())
    }

    /// Build with an explicit generation time
    pub fn build_at(
        &self,
        outcomes: Vec<Outcome>,
        record_id: &Value,
        now: DateTime<Utc>,
    ) -> ConformanceReport {
        ConformanceReport {
            id: Uuid::new_v4().to_string(),
            report_type: REPORT_TYPE.to_string(),
            summary: Summary::from_outcomes(&outcomes),
            generated_by: self.generated_by.clone(),
            tests: outcomes,
            datetime: now.format(DATETIME_FORMAT).to_string(),
            metadata_id: record_id.clone(),
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
