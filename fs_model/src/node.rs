//! Node identifiers and the file/directory variants

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a node in the tree arena
///
/// Ids are never reused and nodes are never removed, so a stored `NodeId`
/// stays valid for the lifetime of the tree that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Creates a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a node ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// A regular file
///
/// Immutable once created; the size is in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// Name of this file, unique within its parent
    pub name: String,
    /// File size in bytes
    pub size: u64,
}

impl FileNode {
    /// Creates a new file node
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A directory
///
/// Directories are created empty and only ever grow; there is no removal
/// or rename. Children are kept in a `BTreeMap` so sibling iteration is
/// always in lexicographic name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Name of this directory, unique within its parent
    pub name: String,
    /// Children by name (name -> node id)
    children: BTreeMap<String, NodeId>,
    /// Parent directory id; the root's parent is its own id
    parent: NodeId,
}

impl DirectoryNode {
    /// Creates a new empty directory
    pub fn new(name: impl Into<String>, parent: NodeId) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
            parent,
        }
    }

    /// Returns the parent directory id
    ///
    /// For the root directory this is the directory's own id.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Adds a child entry
    ///
    /// Returns true if the entry was added, false if the name already exists.
    pub fn add_entry(&mut self, name: impl Into<String>, id: NodeId) -> bool {
        let name = name.into();
        if self.children.contains_key(&name) {
            return false;
        }
        self.children.insert(name, id);
        true
    }

    /// Gets a child id by name
    pub fn entry(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Iterates over children in lexicographic name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Counts the number of children
    pub fn count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the directory has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A node in the tree: either a file or a directory
///
/// The variant is closed on purpose; traversals match on it exhaustively,
/// so there is no "unknown node kind" case to handle at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A regular file
    File(FileNode),
    /// A directory
    Directory(DirectoryNode),
}

impl Node {
    /// Returns the node's name
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Directory(dir) => &dir.name,
        }
    }

    /// Returns true if this node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Returns the directory payload, if this node is a directory
    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    /// Returns the file payload, if this node is a file
    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::File(file) => write!(f, "file {} ({} bytes)", file.name, file.size),
            Node::Directory(dir) => write!(f, "dir {}", dir.name),
        }
    }
}
