//! Entry name validation
//!
//! Names are plain path components; the tree never resolves multi-segment
//! paths, so anything that could smuggle path structure into a single name
//! is rejected at creation time.

use thiserror::Error;

/// Errors that can occur when validating an entry name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty, a dot component, or contains a separator
    #[error("Invalid entry name: {0:?}")]
    InvalidName(String),
}

/// Returns true if the name is valid for a directory entry
pub fn is_valid_entry_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name != "/"
        && !name.contains('/')
        && !name.contains('\0')
}

/// Validates a single entry name
pub fn validate_entry_name(name: &str) -> Result<(), NameError> {
    if is_valid_entry_name(name) {
        Ok(())
    } else {
        Err(NameError::InvalidName(name.to_string()))
    }
}
