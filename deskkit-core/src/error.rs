use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything a record store operation can report back to the UI.
///
/// None of these are fatal: validation and lookup errors are raised before
/// any mutation, persistence errors leave the in-memory records untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("no record at position {position} (store holds {len})")]
    OutOfRange { position: usize, len: usize },

    #[error("no {kind} named '{key}'")]
    NotFound { kind: &'static str, key: String },

    #[error("error decoding {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error encoding records: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("error saving {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Validation and lookup failures come from user input; the rest from the filesystem.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::OutOfRange { .. } | Self::NotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_bare_message() {
        let e = StoreError::validation("name", "Name and Phone are required.");
        assert_eq!(e.to_string(), "Name and Phone are required.");
        assert!(e.is_user_error());
    }

    #[test]
    fn out_of_range_mentions_position() {
        let e = StoreError::OutOfRange { position: 4, len: 2 };
        assert_eq!(e.to_string(), "no record at position 4 (store holds 2)");
    }

    #[test]
    fn write_errors_are_not_user_errors() {
        let e = StoreError::Write {
            path: PathBuf::from("todo.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!e.is_user_error());
        assert!(e.to_string().starts_with("error saving todo.json"));
    }
}
