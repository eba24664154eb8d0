// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated user directory plus a command factory bound to it
pub struct TestEnv {
    _tmp: TempDir,
    pub user_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let user_dir = tmp.path().join("user");

        Self {
            _tmp: tmp,
            user_dir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("eomp").expect("eomp binary");
        cmd.env("EOMP_USER_DIR", &self.user_dir)
            .env("EOMP_SCHEMA_URL", data("eomp-schema.json"))
            .env_remove("EOMP_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Cache the test schema
    pub fn synced(self) -> Self {
        self.cmd().args(["bundle", "sync"]).assert().success();
        self
    }
}

pub fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
