//! Keyed-document storage boundary.
//!
//! This module defines the abstraction the inventory controller reads and
//! writes through, without making storage assumptions beyond the contract
//! on [`DocumentStore`].

pub mod in_memory;
pub mod rest;
pub mod r#trait;

pub use in_memory::InMemoryDocumentStore;
pub use rest::RestDocumentStore;
pub use r#trait::{DocumentStore, Fields, StoreError};
