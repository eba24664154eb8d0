// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Domain requirement execution
//!
//! Each rule runs inside its own fault boundary: an error or a panic becomes
//! a FAILED outcome for that requirement alone.

use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

use super::outcome::Outcome;
use super::requirements::{DomainRule, Verdict};
use crate::record::Record;

/// Evaluate one domain rule against a record
pub fn evaluate(id: &str, rule: &dyn DomainRule, record: &Record) -> Outcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(record)));

    match result {
        Ok(Ok(verdict)) => from_verdict(id, verdict),
        Ok(Err(fault)) => {
            warn!("Requirement {} faulted: {:#}", id, fault);
            Outcome::failed(id, format!("internal fault: {:#}", fault), vec![])
        }
        Err(payload) => {
            let text = panic_payload_to_string(payload.as_ref());
            warn!("Requirement {} panicked: {}", id, text);
            Outcome::failed(id, format!("internal fault: rule panicked: {}", text), vec![])
        }
    }
}

fn from_verdict(id: &str, verdict: Verdict) -> Outcome {
    match verdict {
        Verdict::Passed => Outcome::passed(id),
        Verdict::Failed { message, errors } => Outcome::failed(id, message, errors),
        Verdict::Skipped { reason } => Outcome::skipped(id, reason),
        Verdict::Warnings { message } => Outcome::warnings(id, message),
    }
}

fn panic_payload_to_string(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ets::outcome::{ErrorEntry, StatusCode};
    use serde_json::json;

    struct Fixed(Verdict);

    impl DomainRule for Fixed {
        fn code(&self) -> &str {
            "fixed"
        }

        fn evaluate(&self, _record: &Record) -> anyhow::Result<Verdict> {
            Ok(self.0.clone())
        }
    }

    struct Faulty;

    impl DomainRule for Faulty {
        fn code(&self) -> &str {
            "faulty"
        }

        fn evaluate(&self, record: &Record) -> anyhow::Result<Verdict> {
            let links = record
                .get("links")
                .ok_or_else(|| anyhow::anyhow!("record has no links"))?;
            Ok(if links.is_array() {
                Verdict::Passed
            } else {
                Verdict::failed("links is not an array")
            })
        }
    }

    struct Panicky;

    impl DomainRule for Panicky {
        fn code(&self) -> &str {
            "panicky"
        }

        fn evaluate(&self, _record: &Record) -> anyhow::Result<Verdict> {
            panic!("index out of range");
        }
    }

    fn record() -> Record {
        Record::from_value(json!({"id": "r1"})).unwrap()
    }

    #[test]
    fn test_verdicts_map_to_codes() {
        let cases = [
            (Verdict::Passed, StatusCode::Passed),
            (Verdict::failed("no"), StatusCode::Failed),
            (Verdict::skipped("not a workflow"), StatusCode::Skipped),
            (Verdict::warnings("consider adding keywords"), StatusCode::Warnings),
        ];

        for (verdict, code) in cases {
            let outcome = evaluate("http://x/fixed", &Fixed(verdict), &record());
            assert_eq!(outcome.code, code);
            assert_eq!(outcome.id, "http://x/fixed");
        }
    }

    #[test]
    fn test_failed_verdict_keeps_errors() {
        let verdict = Verdict::Failed {
            message: "1 error(s)".into(),
            errors: vec![ErrorEntry::new("/links/0", "missing rel")],
        };
        let outcome = evaluate("http://x/fixed", &Fixed(verdict), &record());
        assert_eq!(outcome.errors.unwrap()[0].location, "/links/0");
    }

    #[test]
    fn test_error_becomes_failed_outcome() {
        let outcome = evaluate("http://x/faulty", &Faulty, &record());
        assert_eq!(outcome.code, StatusCode::Failed);
        assert!(outcome.message.unwrap().contains("record has no links"));
    }

    #[test]
    fn test_panic_becomes_failed_outcome() {
        let outcome = evaluate("http://x/panicky", &Panicky, &record());
        assert_eq!(outcome.code, StatusCode::Failed);
        assert!(outcome.message.unwrap().contains("index out of range"));
    }
}
