// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Settings loading
//!
//! Where the schema bundle lives and where it is synchronised from. Settings
//! come from an optional YAML or TOML file, then command-line/env overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{EompError, EompResult};

/// Versioned location of the bundled EOMP schema
pub const DEFAULT_SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/EOEPCA/eomp/refs/heads/master/schemas/eomp-bundled.json";

/// File name of the cached schema inside the bundle directory
pub const DEFAULT_SCHEMA_FILE: &str = "eomp-bundled.json";

/// eomp-ets settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Per-user state directory
    #[serde(default = "default_user_dir")]
    pub user_dir: PathBuf,

    /// Where `bundle sync` fetches the schema from (URL or local path)
    #[serde(default = "default_schema_url")]
    pub schema_url: String,

    /// Schema file name within the bundle directory
    #[serde(default = "default_schema_file")]
    pub schema_file: String,
}

fn default_user_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".eomp"))
        .unwrap_or_else(|| PathBuf::from(".eomp"))
}

fn default_schema_url() -> String {
    DEFAULT_SCHEMA_URL.to_string()
}

fn default_schema_file() -> String {
    DEFAULT_SCHEMA_FILE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_dir: default_user_dir(),
            schema_url: default_schema_url(),
            schema_file: default_schema_file(),
        }
    }
}

impl Settings {
    /// Load from file. A missing file yields defaults.
    pub fn load(path: &Path) -> EompResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| EompError::FileReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            other => Err(EompError::Config {
                message: format!(
                    "unsupported settings format '{}' for {}",
                    other.unwrap_or(""),
                    path.display()
                ),
                help: Some("Use a .yaml, .yml or .toml file".into()),
            }),
        }
    }

    /// Resolve settings from an optional file plus explicit overrides
    pub fn resolve(
        path: Option<&Path>,
        user_dir: Option<PathBuf>,
        schema_url: Option<String>,
    ) -> EompResult<Self> {
        let mut settings = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };

        if let Some(dir) = user_dir {
            settings.user_dir = dir;
        }
        if let Some(url) = schema_url {
            settings.schema_url = url;
        }

        Ok(settings)
    }

    /// Directory holding the synchronised schema bundle
    pub fn bundle_dir(&self) -> PathBuf {
        self.user_dir.join("eomp")
    }

    /// Full path of the cached schema
    pub fn schema_path(&self) -> PathBuf {
        self.bundle_dir().join(&self.schema_file)
    }
}
