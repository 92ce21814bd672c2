//! Shared fixtures for integration tests.

use std::path::Path;
use std::sync::Arc;

use herald::domain::models::config::Config;
use herald::infrastructure::store::FsDocumentStore;
use tempfile::TempDir;

/// A project directory seeded with `.herald/` documents plus a store over it.
pub struct Fixture {
    pub dir: TempDir,
    pub store: Arc<FsDocumentStore>,
    pub config: Config,
}

impl Fixture {
    /// Create an empty project; every document read falls back to defaults.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::default();
        let store = Arc::new(FsDocumentStore::new(config.documents.clone(), dir.path()));
        Self { dir, store, config }
    }

    /// Write one JSON document under the project's `.herald/` directory.
    pub fn write_doc(&self, file_name: &str, value: &serde_json::Value) {
        let path = self.dir.path().join(".herald").join(file_name);
        std::fs::create_dir_all(path.parent().unwrap()).expect("create .herald");
        std::fs::write(&path, serde_json::to_vec_pretty(value).expect("serialize"))
            .expect("write fixture document");
    }

    /// Read one JSON document back from disk, if present.
    pub fn read_doc(&self, file_name: &str) -> Option<serde_json::Value> {
        let path = self.dir.path().join(".herald").join(file_name);
        let bytes = std::fs::read(path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// List persisted audit artifact file names.
    pub fn audit_artifacts(&self) -> Vec<String> {
        let audit_dir = self.dir.path().join(".herald/audit");
        list_files(&audit_dir)
    }
}

fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
