// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Filesystem-backed schema store
//!
//! Caches the bundled schema under `<user_dir>/eomp/`. A sync downloads to a
//! staging file next to the target and renames it into place, so a failed
//! download never leaves a half-written schema behind.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::{SchemaStore, SyncSummary};
use crate::config::Settings;
use crate::utils::http;
use crate::{EompError, EompResult};

/// Schema store rooted in the user directory
#[derive(Debug, Clone)]
pub struct FilesystemSchemaStore {
    /// Cached schema location
    schema_path: PathBuf,
    /// URL or local path to sync from
    source: String,
}

impl FilesystemSchemaStore {
    pub fn new(settings: &Settings) -> Self {
        Self {
            schema_path: settings.schema_path(),
            source: settings.schema_url.clone(),
        }
    }

    /// Where the cached schema lives
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether a schema has been synchronised
    pub fn is_synced(&self) -> bool {
        self.schema_path.is_file()
    }

    async fn fetch_source(&self) -> EompResult<String> {
        if http::is_remote(&self.source) {
            http::fetch_text(&self.source).await
        } else {
            let path = Path::new(&self.source);
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| EompError::FileReadError {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                })
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .schema_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".part");
        self.schema_path.with_file_name(name)
    }
}

#[async_trait]
impl SchemaStore for FilesystemSchemaStore {
    fn get_schema(&self) -> EompResult<Value> {
        if !self.schema_path.exists() {
            let err = EompError::schema_missing(&self.schema_path);
            error!("{}", err);
            return Err(err);
        }

        debug!("Reading schema from {}", self.schema_path.display());
        let content = std::fs::read_to_string(&self.schema_path).map_err(|e| {
            EompError::SchemaUnavailable {
                reason: format!("cannot read {}: {}", self.schema_path.display(), e),
            }
        })?;

        serde_json::from_str(&content).map_err(|e| EompError::SchemaUnavailable {
            reason: format!("{} is not valid JSON: {}", self.schema_path.display(), e),
        })
    }

    async fn sync(&self) -> EompResult<SyncSummary> {
        info!("Caching schema from {}", self.source);
        let content = self.fetch_source().await?;

        // Refuse to cache something the validator could never load
        serde_json::from_str::<Value>(&content).map_err(|e| EompError::Fetch {
            url: self.source.clone(),
            error: format!("response is not JSON: {}", e),
        })?;

        let digest = blake3::hash(content.as_bytes()).to_hex().to_string();
        let size = content.len() as u64;

        if let Ok(existing) = tokio::fs::read(&self.schema_path).await {
            if blake3::hash(&existing).to_hex().as_str() == digest {
                debug!("Cached schema already up to date");
                return Ok(SyncSummary {
                    path: self.schema_path.clone(),
                    size,
                    digest,
                    changed: false,
                });
            }
        }

        let dir = self
            .schema_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| EompError::FileWriteError {
                path: dir.clone(),
                error: e.to_string(),
            })?;

        let staging = self.staging_path();
        debug!("Writing schema to {}", staging.display());
        tokio::fs::write(&staging, content.as_bytes())
            .await
            .map_err(|e| EompError::FileWriteError {
                path: staging.clone(),
                error: e.to_string(),
            })?;

        debug!("Moving {} to {}", staging.display(), self.schema_path.display());
        tokio::fs::rename(&staging, &self.schema_path)
            .await
            .map_err(|e| EompError::FileWriteError {
                path: self.schema_path.clone(),
                error: e.to_string(),
            })?;

        Ok(SyncSummary {
            path: self.schema_path.clone(),
            size,
            digest,
            changed: true,
        })
    }
}
