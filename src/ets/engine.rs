// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Conformance engine
//!
//! Runs every requirement against one record and assembles the report.

use std::sync::Arc;
use tracing::{debug, info};

use super::outcome::Outcome;
use super::report::{ConformanceReport, ReportBuilder};
use super::requirements::{Procedure, RuleRegistry};
use super::runner;
use super::validation::SchemaValidator;
use crate::bundle::SchemaStore;
use crate::record::Record;
use crate::{EompError, EompResult};

/// Executable Test Suite for EOMP records
pub struct ConformanceEngine {
    store: Arc<dyn SchemaStore>,
    registry: RuleRegistry,
    reports: ReportBuilder,
    errors: Vec<Outcome>,
}

impl ConformanceEngine {
    /// Engine with the built-in requirements of this release
    pub fn new(store: Arc<dyn SchemaStore>) -> Self {
        Self::with_registry(store, RuleRegistry::new())
    }

    pub fn with_registry(store: Arc<dyn SchemaStore>, registry: RuleRegistry) -> Self {
        Self {
            store,
            registry,
            reports: ReportBuilder::new(),
            errors: Vec::new(),
        }
    }

    /// Replace the report builder
    pub fn with_report_builder(mut self, reports: ReportBuilder) -> Self {
        self.reports = reports;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run all requirements against `record`
    ///
    /// Fails only when the schema cannot be obtained; any requirement
    /// failure is part of the returned report.
    pub fn run(&mut self, record: &Record) -> EompResult<ConformanceReport> {
        self.errors.clear();

        let requirements = self.registry.list_requirements();
        let mut results = Vec::with_capacity(requirements.len());

        info!("Running {} requirement(s) against {}", requirements.len(), record.id());

        for requirement in &requirements {
            let outcome = match &requirement.procedure {
                Procedure::SchemaValidation => {
                    debug!("Running schema validation");
                    let schema = self.store.get_schema()?;
                    SchemaValidator::compile(&schema)?.validate(record)
                }
                Procedure::Domain(rule) => {
                    debug!("Running {}", requirement.id);
                    runner::evaluate(&requirement.id, rule.as_ref(), record)
                }
            };

            if outcome.is_failed() {
                self.errors.push(outcome.clone());
            }
            results.push(outcome);
        }

        let report = self.reports.build(results, record.id());
        info!(
            "Finished: {} passed, {} failed, {} skipped, {} warnings",
            report.summary.passed,
            report.summary.failed,
            report.summary.skipped,
            report.summary.warnings
        );

        Ok(report)
    }

    /// FAILED outcomes from the last run
    pub fn errors(&self) -> &[Outcome] {
        &self.errors
    }

    /// Fail with `SuiteFailed` if the last run had any FAILED outcome
    pub fn raise_for_status(&self) -> EompResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(EompError::SuiteFailed {
                failures: self.errors.clone(),
            })
        }
    }
}
