use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Message surfaced when a submitted entry fails validation.
///
/// Both rules share one message; the entry form renders a single error line.
pub const INVALID_ENTRY_MESSAGE: &str =
    "Item name cannot be empty and quantity must be greater than 0";

/// A single pantry entry as held in the snapshot and rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item name; doubles as the document key in the backing store.
    pub name: String,
    /// Units on hand. Never negative; a foreign document with a malformed
    /// quantity surfaces here as 0.
    pub quantity: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Admission check for a submitted entry (shared by add and update).
///
/// The name must be non-blank after trimming and the quantity at least 1.
/// The name itself is *not* trimmed here: whatever string the user typed is
/// what keys the document.
pub fn validate_entry(name: &str, quantity: u64) -> DomainResult<()> {
    if name.trim().is_empty() || quantity == 0 {
        return Err(DomainError::validation(INVALID_ENTRY_MESSAGE));
    }
    Ok(())
}
