pub mod document_store;

pub use document_store::{load_or_default, names, DocumentStore, StoreError};
