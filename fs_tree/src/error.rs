//! Tree operation errors

use fs_model::{NameError, NodeId};
use thiserror::Error;

/// Errors that can occur during tree navigation and mutation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsError {
    /// No child with this name under the current directory
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    /// Attempted to descend into a file
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Name collision on creation (against file or directory children)
    #[error("Duplicate entry name: {0}")]
    DuplicateName(String),

    /// Malformed entry name
    #[error("Name error: {0}")]
    Name(#[from] NameError),

    /// An id stored in the tree has no node in the arena
    ///
    /// Unreachable through the public API; reported instead of panicking.
    #[error("Node missing from tree: {0}")]
    NodeMissing(NodeId),
}
