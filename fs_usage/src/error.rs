//! Query errors

use fs_tree::FsError;
use thiserror::Error;

/// Errors that can occur while answering a usage query
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// The tree reported an integrity problem during traversal
    #[error("Tree error: {0}")]
    Tree(#[from] FsError),

    /// Total usage exceeds the disk capacity
    #[error("Disk usage {used} exceeds capacity {disk_size}")]
    CapacityExceeded { used: u64, disk_size: u64 },

    /// No directory is large enough to free the required space
    #[error("No deletion candidate frees at least {needed} bytes")]
    NoCandidateFound { needed: u64 },
}
