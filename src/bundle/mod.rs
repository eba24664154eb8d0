// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Schema bundle management
//!
//! The engine reads the authoritative EOMP schema through [`SchemaStore`].
//! Synchronising the bundle is a separate, idempotent step performed before
//! any run; it is never interleaved with validation.

mod filesystem;

pub use filesystem::FilesystemSchemaStore;

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

use crate::{EompError, EompResult};

/// Supplier of the authoritative schema document
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Return the schema, or `SchemaUnavailable` if nothing is cached
    fn get_schema(&self) -> EompResult<Value>;

    /// Fetch the schema from its source and cache it
    async fn sync(&self) -> EompResult<SyncSummary>;
}

/// What a `sync` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    /// Where the schema is stored
    pub path: PathBuf,

    /// Size in bytes
    pub size: u64,

    /// BLAKE3 digest (hex)
    pub digest: String,

    /// False when the cached copy was already identical
    pub changed: bool,
}

/// Schema held in memory, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaStore {
    schema: Option<Value>,
}

impl InMemorySchemaStore {
    pub fn new(schema: Value) -> Self {
        Self {
            schema: Some(schema),
        }
    }

    /// A store that behaves as if `sync` never ran
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SchemaStore for InMemorySchemaStore {
    fn get_schema(&self) -> EompResult<Value> {
        self.schema
            .clone()
            .ok_or_else(|| EompError::SchemaUnavailable {
                reason: "no schema loaded".into(),
            })
    }

    async fn sync(&self) -> EompResult<SyncSummary> {
        let schema = self.get_schema()?;
        let bytes = serde_json::to_vec(&schema)?;

        Ok(SyncSummary {
            path: PathBuf::new(),
            size: bytes.len() as u64,
            digest: blake3::hash(&bytes).to_hex().to_string(),
            changed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_store_is_unavailable() {
        let store = InMemorySchemaStore::empty();
        assert!(matches!(
            store.get_schema(),
            Err(EompError::SchemaUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_in_memory_sync_is_noop() {
        let store = InMemorySchemaStore::new(json!({"type": "object"}));
        let summary = store.sync().await.unwrap();
        assert!(!summary.changed);
        assert_eq!(store.get_schema().unwrap(), json!({"type": "object"}));
    }
}
