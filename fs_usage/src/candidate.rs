//! Deletion candidate search

use crate::error::UsageError;
use fs_model::{Node, NodeId};
use fs_tree::{FileSystem, FsError};
use serde::Serialize;

/// A directory whose removal would free enough space
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionCandidate {
    /// Path from the root, `/`-joined; the root itself is `"/"`
    pub path: String,
    /// Recursive size of the directory in bytes
    pub size: u64,
}

/// Finds the smallest directory whose removal frees enough space
///
/// `unused = disk_size - total_used` and `needed` is the part of the
/// update requirement that free space does not already cover; directories
/// with size `>= needed` qualify. Qualifying directories are collected in
/// post-order over lexicographically ordered siblings, and ties on the
/// minimal size keep the entry encountered first in that fixed order.
pub fn smallest_deletion_candidate(
    fs: &FileSystem,
    total_used: u64,
    update_requirement: u64,
) -> Result<DeletionCandidate, UsageError> {
    let disk_size = fs.disk_size();
    let unused = disk_size
        .checked_sub(total_used)
        .ok_or(UsageError::CapacityExceeded {
            used: total_used,
            disk_size,
        })?;
    let needed = update_requirement.saturating_sub(unused);

    let mut candidates = Vec::new();
    collect_candidates(fs, fs.root(), "/", needed, &mut candidates)?;

    let mut best: Option<DeletionCandidate> = None;
    for candidate in candidates {
        if best.as_ref().map_or(true, |b| candidate.size < b.size) {
            best = Some(candidate);
        }
    }
    best.ok_or(UsageError::NoCandidateFound { needed })
}

/// Returns the recursive size of a directory, recording qualifying
/// `(path, size)` pairs along the way
fn collect_candidates(
    fs: &FileSystem,
    id: NodeId,
    path: &str,
    needed: u64,
    out: &mut Vec<DeletionCandidate>,
) -> Result<u64, UsageError> {
    let dir = fs.directory(id)?;

    let mut local = 0;
    for (name, child_id) in dir.entries() {
        match fs.node(child_id).ok_or(FsError::NodeMissing(child_id))? {
            Node::File(file) => local += file.size,
            Node::Directory(_) => {
                let child_path = if path == "/" {
                    format!("/{name}")
                } else {
                    format!("{path}/{name}")
                };
                local += collect_candidates(fs, child_id, &child_path, needed, out)?;
            }
        }
    }

    if local >= needed {
        out.push(DeletionCandidate {
            path: path.to_string(),
            size: local,
        });
    }
    Ok(local)
}
