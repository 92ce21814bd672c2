use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

/// Logical document names resolved by store adapters.
pub mod names {
    pub use crate::domain::models::patch::targets::{
        EXPERIMENT_ROSTER, GOVERNANCE, PROMOTION_QUEUE,
    };

    /// Per-slug proof overrides.
    pub const OVERRIDES: &str = "overrides";
    /// Worthiness rubric results.
    pub const WORTHINESS: &str = "worthiness";
    /// Engagement summary.
    pub const ENGAGEMENT: &str = "engagement";
    /// Promotion history, newest first.
    pub const PROMOTION_HISTORY: &str = "promotion-history";
    /// Cost projection.
    pub const COST_PROJECTION: &str = "cost-projection";
    /// Recommendations list.
    pub const RECOMMENDATIONS: &str = "recommendations";
    /// Decisions output document.
    pub const DECISIONS: &str = "decisions";
}

/// Document storage errors
///
/// Only unrecoverable I/O failures surface here. Missing and malformed
/// documents are fail-soft by design: readers report them as `None` and the
/// caller substitutes the documented empty default.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on document '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error on document '{name}': {source}")]
    Serialization {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown document name: '{0}'")]
    UnknownDocument(String),
}

/// Whole-document storage port.
///
/// The engine's only persistence discipline: one read and one replace-write
/// per document, keyed by a logical document name that the adapter maps to a
/// location. No partial updates and no locks: callers must not run two
/// passes concurrently against the same document set.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a document by name.
    ///
    /// Returns `None` when the document is missing or fails to parse (both
    /// are logged and degraded, never fatal).
    async fn read(&self, name: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Replace a document wholesale.
    async fn write(&self, name: &str, value: &serde_json::Value) -> Result<(), StoreError>;
}

/// Read a typed document, degrading absent or mistyped content to the
/// documented empty default. Only unrecoverable I/O errors propagate.
pub async fn load_or_default<T, S>(store: &S, name: &str) -> Result<T, StoreError>
where
    T: serde::de::DeserializeOwned + Default,
    S: DocumentStore + ?Sized,
{
    match store.read(name).await? {
        None => Ok(T::default()),
        Some(value) => match serde_json::from_value(value) {
            Ok(document) => Ok(document),
            Err(err) => {
                warn!(name, %err, "document failed to deserialize, using empty default");
                Ok(T::default())
            }
        },
    }
}
