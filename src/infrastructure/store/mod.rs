//! Filesystem document store.
//!
//! Whole-document read/replace of JSON files, with fail-soft reads: a
//! missing or malformed document degrades to `None` (the caller substitutes
//! the documented empty default) rather than aborting the run. Only real
//! I/O failures propagate.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::models::config::DocumentPathsConfig;
use crate::domain::ports::{names, DocumentStore, StoreError};

/// Prefix for per-run audit artifacts, resolved under the audit directory.
const AUDIT_PREFIX: &str = "audit/";

/// Document store backed by project-local JSON files.
pub struct FsDocumentStore {
    paths: DocumentPathsConfig,
    root: PathBuf,
}

impl FsDocumentStore {
    /// Create a store resolving configured paths relative to `root`.
    pub fn new(paths: DocumentPathsConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            paths,
            root: root.into(),
        }
    }

    /// Map a logical document name to its configured path.
    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        let relative = match name {
            names::GOVERNANCE => self.paths.governance.clone(),
            names::PROMOTION_QUEUE => self.paths.promotion_queue.clone(),
            names::OVERRIDES => self.paths.overrides.clone(),
            names::WORTHINESS => self.paths.worthiness.clone(),
            names::ENGAGEMENT => self.paths.engagement.clone(),
            names::PROMOTION_HISTORY => self.paths.history.clone(),
            names::COST_PROJECTION => self.paths.cost_projection.clone(),
            names::EXPERIMENT_ROSTER => self.paths.experiment_roster.clone(),
            names::RECOMMENDATIONS => self.paths.recommendations.clone(),
            names::DECISIONS => self.paths.decisions.clone(),
            other => {
                let Some(artifact) = other.strip_prefix(AUDIT_PREFIX) else {
                    return Err(StoreError::UnknownDocument(other.to_string()));
                };
                return Ok(self
                    .root
                    .join(&self.paths.audit_dir)
                    .join(artifact));
            }
        };
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn read(&self, name: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let path = self.resolve(name)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(name, path = %path.display(), "document missing, using empty default");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    name: name.to_string(),
                    source,
                })
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(name, %err, "document malformed, using empty default");
                Ok(None)
            }
        }
    }

    async fn write(&self, name: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        if let Some(parent) = path.parent() {
            ensure_dir(name, parent).await?;
        }

        let bytes =
            serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialization {
                name: name.to_string(),
                source,
            })?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StoreError::Io {
                name: name.to_string(),
                source,
            })
    }
}

async fn ensure_dir(name: &str, dir: &Path) -> Result<(), StoreError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| StoreError::Io {
            name: name.to_string(),
            source,
        })
}
