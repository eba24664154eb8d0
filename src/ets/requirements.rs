// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Requirement definitions and registry
//!
//! Requirements are declared statically. Schema validation is built in and
//! always runs first; domain rules follow in identifier order, so two runs of
//! the same engine version execute the same sequence.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::outcome::ErrorEntry;
use crate::record::Record;
use crate::{EompError, EompResult};

/// Namespace for EOMP core conformance requirements
pub const REQUIREMENT_NAMESPACE: &str = "http://eoepca.org/spec/eomp/1/conf/core";

/// Reserved code of the schema validation requirement
pub const VALIDATION_CODE: &str = "validation";

/// Requirement identifier as URI
pub fn requirement_uri(code: &str) -> String {
    format!("{}/{}", REQUIREMENT_NAMESPACE, code)
}

/// Verdict of a domain rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed {
        message: String,
        errors: Vec<ErrorEntry>,
    },
    /// Rule does not apply to this record
    Skipped { reason: String },
    /// Non-fatal advisory
    Warnings { message: String },
}

impl Verdict {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn warnings(message: impl Into<String>) -> Self {
        Self::Warnings {
            message: message.into(),
        }
    }
}

/// A domain conformance rule beyond schema validation
///
/// Returning `Err` (or panicking) marks the requirement FAILED with the fault
/// description; it never aborts the run.
pub trait DomainRule: Send + Sync {
    /// Short code, appended to [`REQUIREMENT_NAMESPACE`]
    fn code(&self) -> &str;

    /// One-line description for listings
    fn description(&self) -> &str {
        ""
    }

    fn evaluate(&self, record: &Record) -> anyhow::Result<Verdict>;
}

/// What executes a requirement
#[derive(Clone)]
pub enum Procedure {
    /// Validation against the authoritative schema
    SchemaValidation,
    Domain(Arc<dyn DomainRule>),
}

/// One conformance check
#[derive(Clone)]
pub struct Requirement {
    /// Globally unique URI identifier
    pub id: String,
    pub procedure: Procedure,
}

impl Requirement {
    pub fn schema_validation() -> Self {
        Self {
            id: requirement_uri(VALIDATION_CODE),
            procedure: Procedure::SchemaValidation,
        }
    }

    pub fn is_schema_validation(&self) -> bool {
        matches!(self.procedure, Procedure::SchemaValidation)
    }

    pub fn description(&self) -> &str {
        match &self.procedure {
            Procedure::SchemaValidation => {
                "Validate that an EOMP record is valid to the authoritative schema"
            }
            Procedure::Domain(rule) => rule.description(),
        }
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.procedure {
            Procedure::SchemaValidation => "schema-validation",
            Procedure::Domain(_) => "domain",
        };
        f.debug_struct("Requirement")
            .field("id", &self.id)
            .field("procedure", &kind)
            .finish()
    }
}

/// Built-in domain rules shipped with this release
///
/// The EOMP core conformance class currently defines none beyond schema
/// validation.
pub fn builtin_domain_rules() -> Vec<Arc<dyn DomainRule>> {
    Vec::new()
}

/// Registry of requirements
#[derive(Default, Clone)]
pub struct RuleRegistry {
    rules: BTreeMap<String, Arc<dyn DomainRule>>,
}

impl RuleRegistry {
    /// Registry with the built-in rules of this release
    pub fn new() -> Self {
        let mut registry = Self::default();

        for rule in builtin_domain_rules() {
            let id = requirement_uri(rule.code());
            registry.rules.insert(id, rule);
        }

        registry
    }

    /// Registry with no domain rules, only schema validation
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a domain rule
    pub fn register(&mut self, rule: Arc<dyn DomainRule>) -> EompResult<()> {
        let code = rule.code();
        if code == VALIDATION_CODE {
            return Err(EompError::ReservedRequirement {
                code: code.to_string(),
            });
        }

        let id = requirement_uri(code);
        if self.rules.contains_key(&id) {
            return Err(EompError::DuplicateRequirement { id });
        }

        self.rules.insert(id, rule);
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_rule(mut self, rule: Arc<dyn DomainRule>) -> EompResult<Self> {
        self.register(rule)?;
        Ok(self)
    }

    /// Get a domain rule by requirement ID
    pub fn get(&self, id: &str) -> Option<&Arc<dyn DomainRule>> {
        self.rules.get(id)
    }

    /// Registered domain rules, by requirement ID
    pub fn rules(&self) -> impl Iterator<Item = (&str, &Arc<dyn DomainRule>)> {
        self.rules.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    /// Number of requirements, schema validation included
    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    /// Requirements in execution order: schema validation, then domain rules
    /// sorted by identifier
    pub fn list_requirements(&self) -> Vec<Requirement> {
        std::iter::once(Requirement::schema_validation())
            .chain(self.rules.iter().map(|(id, rule)| Requirement {
                id: id.clone(),
                procedure: Procedure::Domain(Arc::clone(rule)),
            }))
            .collect()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}
