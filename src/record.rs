// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! EOMP record ingestion
//!
//! Turns raw text into a [`Record`] the engine can test. Anything that is not
//! a JSON object with an `id` is rejected here, before the engine runs.

use serde_json::Value;
use std::path::Path;
use tracing::{debug, error};

use crate::utils::http;
use crate::{EompError, EompResult};

/// A parsed EOMP record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    value: Value,
}

impl Record {
    /// Parse a record from JSON text
    pub fn parse(content: &str) -> EompResult<Self> {
        debug!("Attempting to parse as JSON");
        let value: Value = serde_json::from_str(content).map_err(|e| {
            error!("{}", e);
            EompError::MalformedRecord {
                reason: format!("Encoding error: {}", e),
            }
        })?;

        Self::from_value(value)
    }

    /// Wrap an already parsed document
    pub fn from_value(value: Value) -> EompResult<Self> {
        let Some(fields) = value.as_object() else {
            return Err(EompError::MalformedRecord {
                reason: format!("expected a JSON object, found {}", json_kind(&value)),
            });
        };

        if !fields.contains_key("id") {
            return Err(EompError::MissingRecordId);
        }

        Ok(Self { value })
    }

    /// The record identifier, as it appears in the document
    pub fn id(&self) -> &Value {
        // presence is checked on construction
        &self.value["id"]
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// The whole document
    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

/// Read record text from a local path or an http(s) URL
pub async fn load_source(file_or_url: &str) -> EompResult<String> {
    if http::is_remote(file_or_url) {
        http::fetch_text(file_or_url).await
    } else {
        let path = Path::new(file_or_url);
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| EompError::FileReadError {
                path: path.to_path_buf(),
                error: e.to_string(),
            })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_record() {
        let record = Record::parse(r#"{"id": "urn:eomp:1", "type": "Feature"}"#).unwrap();
        assert_eq!(record.id(), &json!("urn:eomp:1"));
        assert_eq!(record.get("type"), Some(&json!("Feature")));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = Record::parse("{not json").unwrap_err();
        match err {
            EompError::MalformedRecord { reason } => assert!(reason.starts_with("Encoding error")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Record::from_value(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_missing_id_is_usage_error() {
        let err = Record::from_value(json!({"type": "Feature"})).unwrap_err();
        assert!(matches!(err, EompError::MissingRecordId));
    }

    #[tokio::test]
    async fn test_load_source_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("record.json");
        std::fs::write(&path, r#"{"id": "a"}"#).unwrap();

        let content = load_source(path.to_str().unwrap()).await.unwrap();
        assert!(content.contains("\"id\""));
    }

    #[tokio::test]
    async fn test_load_source_missing_file() {
        let err = load_source("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, EompError::FileReadError { .. }));
    }
}
