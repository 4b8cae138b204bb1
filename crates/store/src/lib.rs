//! `larder-store` — persistence boundary for the pantry inventory.
//!
//! Keyed JSON documents in a hosted document service, plus an in-memory
//! rendition of the same contract for tests/dev.

pub mod config;
pub mod document_store;

pub use config::StoreConfig;
pub use document_store::{
    DocumentStore, Fields, InMemoryDocumentStore, RestDocumentStore, StoreError,
};
