//! The contract every persisted record type satisfies.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Lower-case noun used in messages ("contact", "task").
    const KIND: &'static str;

    /// Reject the record if a required field is empty or a field is out of its domain.
    fn validate(&self) -> Result<(), StoreError>;

    /// Display key: contact name or task description.
    fn label(&self) -> &str;
}

/// Shared required-field check. Whitespace-only counts as empty.
pub(crate) fn require(field: &'static str, value: &str, message: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(field, message));
    }
    Ok(())
}
