// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

mod common;

use predicates::str::contains;
use serde_json::Value;

use common::{data, TestEnv};

fn report_from(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout is a JSON report")
}

#[test]
fn requirements_json_lists_validation_first() {
    let out = TestEnv::new()
        .cmd()
        .args(["requirements", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        list[0]["id"],
        "http://eoepca.org/spec/eomp/1/conf/core/validation"
    );
    assert_eq!(list[0]["kind"], "schema");
}

#[test]
fn requirements_text() {
    TestEnv::new()
        .cmd()
        .arg("requirements")
        .assert()
        .success()
        .stdout(contains("conf/core/validation"));
}

#[test]
fn bundle_sync_reports_cache_path() {
    let env = TestEnv::new();
    env.cmd()
        .args(["bundle", "sync"])
        .assert()
        .success()
        .stdout(contains("Schema cached at"));

    assert!(env.user_dir.join("eomp").join("eomp-bundled.json").is_file());

    env.cmd()
        .args(["bundle", "sync"])
        .assert()
        .success()
        .stdout(contains("already up to date"));
}

#[test]
fn bundle_sync_bad_source_fails() {
    TestEnv::new()
        .cmd()
        .env("EOMP_SCHEMA_URL", data("does-not-exist.json"))
        .args(["bundle", "sync"])
        .assert()
        .failure();
}

#[test]
fn validate_without_schema_fails() {
    TestEnv::new()
        .cmd()
        .args(["record", "validate"])
        .arg(data("valid-record.json"))
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("schema unavailable"));
}

#[test]
fn validate_passing_record() {
    let env = TestEnv::new().synced();
    let out = env
        .cmd()
        .args(["record", "validate"])
        .arg(data("valid-record.json"))
        .assert()
        .code(0)
        .stderr(contains("Detected EOMP record"))
        .get_output()
        .stdout
        .clone();

    let report = report_from(&out);
    assert_eq!(report["report_type"], "ets");
    assert_eq!(report["metadata_id"], "worldcereal_inference");
    assert_eq!(report["summary"]["PASSED"], 1);
    assert_eq!(report["summary"]["FAILED"], 0);
    assert!(report["tests"][0].get("errors").is_none());
}

#[test]
fn validate_failing_record_exit_code_is_failed_count() {
    let env = TestEnv::new().synced();
    let out = env
        .cmd()
        .args(["record", "validate"])
        .arg(data("missing-title.json"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = report_from(&out);
    let validation = &report["tests"][0];
    assert_eq!(validation["code"], "FAILED");
    assert_eq!(validation["message"], "1 error(s)");
    assert_eq!(validation["errors"][0]["location"], "/properties/title");
}

#[test]
fn validate_malformed_record() {
    TestEnv::new()
        .synced()
        .cmd()
        .args(["record", "validate"])
        .arg(data("malformed.json"))
        .assert()
        .failure()
        .stderr(contains("Encoding error"));
}

#[test]
fn validate_missing_file() {
    TestEnv::new()
        .cmd()
        .args(["record", "validate", "no-such-record.json"])
        .assert()
        .failure()
        .stderr(contains("no-such-record.json"));
}
