//! EOMP Executable Test Suite
//!
//! The conformance core: requirement registry, requirement runners, the
//! engine that orders them, and the report they produce.
//!
//! ```no_run
//! use std::sync::Arc;
//! use eomp_ets::bundle::FilesystemSchemaStore;
//! use eomp_ets::config::Settings;
//! use eomp_ets::ets::ConformanceEngine;
//! use eomp_ets::record::Record;
//!
//! # fn main() -> eomp_ets::EompResult<()> {
//! let store = FilesystemSchemaStore::new(&Settings::default());
//! let record = Record::parse(r#"{"id": "urn:eomp:example"}"#)?;
//!
//! let mut engine = ConformanceEngine::new(Arc::new(store));
//! let report = engine.run(&record)?;
//! println!("{} failed", report.summary.failed);
//! engine.raise_for_status()?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod outcome;
pub mod report;
pub mod requirements;
pub mod runner;
pub mod validation;

pub use engine::ConformanceEngine;
pub use outcome::{ErrorEntry, Outcome, StatusCode};
pub use report::{ConformanceReport, ReportBuilder, Summary, REPORT_TYPE};
pub use requirements::{
    requirement_uri, DomainRule, Procedure, Requirement, RuleRegistry, Verdict,
    REQUIREMENT_NAMESPACE, VALIDATION_CODE,
};
pub use validation::SchemaValidator;
