// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Schema validation requirement
//!
//! Validates a record against the bundled EOMP JSON Schema (draft 2020-12).
//! Every violation is collected; nothing fails fast.

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, ValidationError, Validator};
use serde_json::Value;
use tracing::debug;

use super::outcome::{ErrorEntry, Outcome};
use super::requirements::{requirement_uri, VALIDATION_CODE};
use crate::record::Record;
use crate::{EompError, EompResult};

/// Formats whose values are checked
pub const CHECKED_FORMATS: [&str; 5] = ["date-time", "email", "regex", "uri", "uri-reference"];

/// Formats the validator knows but which are accepted without checking
const UNCHECKED_FORMATS: [&str; 14] = [
    "date",
    "duration",
    "hostname",
    "idn-email",
    "idn-hostname",
    "ipv4",
    "ipv6",
    "iri",
    "iri-reference",
    "json-pointer",
    "relative-json-pointer",
    "time",
    "uri-template",
    "uuid",
];

/// Compiled EOMP schema
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compile a schema document
    ///
    /// A schema that does not compile leaves nothing to judge against, so it
    /// is reported as `SchemaUnavailable`.
    pub fn compile(schema: &Value) -> EompResult<Self> {
        let mut options = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .should_validate_formats(true);

        for format in UNCHECKED_FORMATS {
            options = options.with_format(format, |_: &str| true);
        }

        let validator = options
            .build(schema)
            .map_err(|e| EompError::SchemaUnavailable {
                reason: format!("schema does not compile: {}", e),
            })?;

        Ok(Self { validator })
    }

    /// All violations of `instance`, in validator order
    pub fn violations(&self, instance: &Value) -> Vec<ErrorEntry> {
        self.validator
            .iter_errors(instance)
            .map(|error| {
                let entry = to_entry(&error);
                debug!("{}", entry);
                entry
            })
            .collect()
    }

    /// Run the schema validation requirement
    pub fn validate(&self, record: &Record) -> Outcome {
        let id = requirement_uri(VALIDATION_CODE);
        let errors = self.violations(record.as_value());

        if errors.is_empty() {
            Outcome::passed(id)
        } else {
            Outcome::failed(id, format!("{} error(s)", errors.len()), errors)
        }
    }
}

/// Validate a record against a schema document in one step
pub fn validate(record: &Record, schema: &Value) -> EompResult<Outcome> {
    Ok(SchemaValidator::compile(schema)?.validate(record))
}

fn to_entry(error: &ValidationError<'_>) -> ErrorEntry {
    let mut location = error.instance_path.to_string();

    // Point at the missing property itself rather than its parent
    if let ValidationErrorKind::Required { property } = &error.kind {
        location.push('/');
        match property {
            Value::String(name) => location.push_str(&escape_pointer(name)),
            other => location.push_str(&other.to_string()),
        }
    }

    if location.is_empty() {
        location.push('/');
    }

    ErrorEntry::new(location, error.to_string())
}

fn escape_pointer(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["id", "type", "properties"],
            "properties": {
                "id": {"type": "string"},
                "type": {"enum": ["Feature"]},
                "properties": {
                    "type": "object",
                    "required": ["updated"],
                    "properties": {
                        "updated": {"type": "string", "format": "date-time"},
                        "contact": {"type": "string", "format": "email"},
                        "homepage": {"type": "string", "format": "uri"},
                        "released": {"type": "string", "format": "date"}
                    }
                }
            }
        })
    }

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_record_passes() {
        let outcome = validate(
            &record(json!({
                "id": "r1",
                "type": "Feature",
                "properties": {"updated": "2024-05-01T12:00:00Z"}
            })),
            &schema(),
        )
        .unwrap();

        assert_eq!(outcome, Outcome::passed(requirement_uri("validation")));
    }

    #[test]
    fn test_missing_property_location() {
        let outcome = validate(
            &record(json!({"id": "r1", "properties": {"updated": "2024-05-01T12:00:00Z"}})),
            &schema(),
        )
        .unwrap();

        let errors = outcome.errors.clone().unwrap();
        assert_eq!(outcome.message.as_deref(), Some("1 error(s)"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, "/type");
        assert!(errors[0].message.contains("type"));
    }

    #[test]
    fn test_collects_every_violation() {
        let outcome = validate(
            &record(json!({
                "id": 7,
                "type": "Collection",
                "properties": {
                    "updated": "yesterday",
                    "contact": "not-an-email",
                    "homepage": "not a uri"
                }
            })),
            &schema(),
        )
        .unwrap();

        let errors = outcome.errors.unwrap();
        let locations: Vec<_> = errors.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(errors.len(), 5);
        assert!(locations.contains(&"/id"));
        assert!(locations.contains(&"/type"));
        assert!(locations.contains(&"/properties/updated"));
        assert!(locations.contains(&"/properties/contact"));
        assert!(locations.contains(&"/properties/homepage"));
    }

    #[test]
    fn test_unchecked_formats_are_accepted() {
        let outcome = validate(
            &record(json!({
                "id": "r1",
                "type": "Feature",
                "properties": {"updated": "2024-05-01T12:00:00Z", "released": "sometime"}
            })),
            &schema(),
        )
        .unwrap();

        assert!(!outcome.is_failed());
    }

    #[test]
    fn test_root_type_error_location() {
        let validator = SchemaValidator::compile(&json!({"type": "array"})).unwrap();
        let errors = validator.violations(&json!({"id": "x"}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, "/");
    }

    #[test]
    fn test_uncompilable_schema_is_unavailable() {
        let err = SchemaValidator::compile(&json!({"type": 12})).err().unwrap();
        assert!(matches!(err, EompError::SchemaUnavailable { .. }));
    }

    #[test]
    fn test_pointer_escaping() {
        assert_eq!(escape_pointer("a/b~c"), "a~1b~0c");
    }
}
