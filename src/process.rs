// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! EOMP ETS as a process
//!
//! Process description and execution entry point for hosting the test suite
//! behind an OGC API - Processes style service. The hosting server itself is
//! not part of this crate.

use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

use crate::bundle::SchemaStore;
use crate::ets::{ConformanceEngine, ConformanceReport, RuleRegistry};
use crate::record::Record;
use crate::utils::http;
use crate::{EompError, EompResult};

/// Process identifier
pub const PROCESS_ID: &str = "eomp-record-validate";

/// Media type of the process result
pub const MIMETYPE: &str = "application/json";

/// JSON Schema of the ETS report
pub const ETS_REPORT_SCHEMA: &str = include_str!("../resources/ets-report.json");

/// Example EOMP record used in the process description
pub const EXAMPLE_RECORD: &str = include_str!("../resources/example-record.json");

/// Process description document
pub fn process_description() -> EompResult<Value> {
    let report_schema: Value = serde_json::from_str(ETS_REPORT_SCHEMA)?;
    let example: Value = serde_json::from_str(EXAMPLE_RECORD)?;

    let mut result_schema = json!({"contentMediaType": MIMETYPE});
    if let (Some(target), Value::Object(fields)) = (result_schema.as_object_mut(), report_schema)
    {
        target.extend(fields);
    }

    Ok(json!({
        "version": crate::VERSION,
        "id": PROCESS_ID,
        "title": {"en": "EOMP record validator"},
        "description": {"en": "Validate a EOMP record against the ETS"},
        "keywords": ["eoepca", "eomp", "ets", "test suite", "metadata"],
        "links": [{
            "type": "text/html",
            "rel": "about",
            "title": "information",
            "href": "https://github.com/EOEPCA/eomp",
            "hreflang": "en-US"
        }],
        "inputs": {
            "record": {
                "title": "EOMP record",
                "description": "EOMP record (can be inline or remote link)",
                "schema": {"type": ["object", "string"]},
                "minOccurs": 1,
                "maxOccurs": 1,
                "metadata": null,
                "keywords": ["eomp"]
            }
        },
        "outputs": {
            "result": {
                "title": "Report of ETS results",
                "description": "Report of ETS results",
                "schema": result_schema
            }
        },
        "example": {
            "inputs": {"record": example}
        }
    }))
}

/// Executes the ETS for process requests
pub struct EtsProcessor {
    store: Arc<dyn SchemaStore>,
    registry: RuleRegistry,
}

impl EtsProcessor {
    pub fn new(store: Arc<dyn SchemaStore>) -> Self {
        Self::with_registry(store, RuleRegistry::new())
    }

    pub fn with_registry(store: Arc<dyn SchemaStore>, registry: RuleRegistry) -> Self {
        Self { store, registry }
    }

    /// Run the ETS on the `record` input
    ///
    /// `record` is either an inline object, a link (string starting with
    /// `http`) or a string holding the JSON document.
    pub async fn execute(&self, inputs: &Value) -> EompResult<(&'static str, ConformanceReport)> {
        let record = match inputs.get("record") {
            None | Some(Value::Null) => {
                let err = EompError::MissingInput {
                    name: "record".into(),
                };
                error!("{}", err);
                return Err(err);
            }
            Some(Value::String(s)) if http::is_remote(s) => {
                debug!("Record is a link");
                Record::parse(&http::fetch_text(s).await?)?
            }
            Some(Value::String(s)) => {
                debug!("Record is inline text");
                Record::parse(s)?
            }
            Some(other) => {
                debug!("Record is inline");
                Record::from_value(other.clone())?
            }
        };

        debug!("Running ETS against record");
        let mut engine =
            ConformanceEngine::with_registry(Arc::clone(&self.store), self.registry.clone());
        let report = engine.run(&record)?;

        Ok((MIMETYPE, report))
    }
}

impl std::fmt::Debug for EtsProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<EtsProcessor>")
    }
}
