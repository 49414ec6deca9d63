//! Post-order size aggregation

use crate::error::UsageError;
use fs_model::{Node, NodeId};
use fs_tree::{FileSystem, FsError};
use serde::Serialize;

/// The result of one aggregation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageSummary {
    /// Total size of the root, i.e. total disk usage
    pub total_used: u64,
    /// Sum of the sizes of directories strictly below the threshold
    pub sum_under_max: u64,
}

/// Computes total usage and the threshold-bounded directory-size sum
///
/// A directory's size is the recursive sum of its children; an empty
/// directory has size 0 and counts toward the sum under any positive
/// threshold.
pub fn usage_summary(fs: &FileSystem, max_size: u64) -> Result<UsageSummary, UsageError> {
    let mut sum_under_max = 0;
    let total_used = directory_size(fs, fs.root(), max_size, &mut sum_under_max)?;
    Ok(UsageSummary {
        total_used,
        sum_under_max,
    })
}

/// Returns the recursive size of a directory, accumulating every
/// directory size below `max_size` into `sum`
fn directory_size(
    fs: &FileSystem,
    id: NodeId,
    max_size: u64,
    sum: &mut u64,
) -> Result<u64, UsageError> {
    let dir = fs.directory(id)?;

    let mut local = 0;
    for (_, child_id) in dir.entries() {
        match fs.node(child_id).ok_or(FsError::NodeMissing(child_id))? {
            Node::File(file) => local += file.size,
            Node::Directory(_) => local += directory_size(fs, child_id, max_size, sum)?,
        }
    }

    if local < max_size {
        *sum += local;
    }
    Ok(local)
}
