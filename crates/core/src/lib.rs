//! `larder-core` — domain foundation for the pantry inventory.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod filter;
pub mod item;

pub use error::{DomainError, DomainResult};
pub use filter::filter_by_name;
pub use item::{Item, validate_entry, INVALID_ENTRY_MESSAGE};
