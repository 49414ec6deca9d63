//! The filesystem tree and its navigation cursor

use crate::error::FsError;
use fs_model::{validate_entry_name, DirectoryNode, FileNode, Node, NodeId};
use std::collections::HashMap;
use transcript::TerminalEvent;

/// Name of the root directory
pub const ROOT_NAME: &str = "/";

/// The simulated filesystem
///
/// Owns every node through an id-indexed arena. Parent links and the
/// cursor are plain [`NodeId`]s, so ownership stays a strict hierarchy
/// from the root down; the root's parent id is its own id, which makes
/// `cd ..` at the root a no-op.
#[derive(Debug, Clone)]
pub struct FileSystem {
    /// Total disk capacity in bytes
    disk_size: u64,
    /// All nodes, indexed by id
    nodes: HashMap<NodeId, Node>,
    /// The root directory id
    root: NodeId,
    /// The directory currently open for mutation
    cursor: NodeId,
}

impl FileSystem {
    /// Creates a new filesystem with an empty root and the given capacity
    pub fn new(disk_size: u64) -> Self {
        let root = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root, Node::Directory(DirectoryNode::new(ROOT_NAME, root)));
        Self {
            disk_size,
            nodes,
            root,
            cursor: root,
        }
    }

    /// Returns the disk capacity in bytes
    pub fn disk_size(&self) -> u64 {
        self.disk_size
    }

    /// Returns the root directory id
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the id of the directory the cursor points at
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Gets a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Gets a directory by id
    ///
    /// Fails with `NotADirectory` if the id names a file, and with
    /// `NodeMissing` if the id has no node at all.
    pub fn directory(&self, id: NodeId) -> Result<&DirectoryNode, FsError> {
        match self.nodes.get(&id) {
            Some(Node::Directory(dir)) => Ok(dir),
            Some(Node::File(file)) => Err(FsError::NotADirectory(file.name.clone())),
            None => Err(FsError::NodeMissing(id)),
        }
    }

    /// Moves the cursor
    ///
    /// `"/"` jumps to the root, `".."` ascends (a no-op at the root),
    /// anything else descends into the named child directory.
    pub fn change_directory(&mut self, target: &str) -> Result<(), FsError> {
        if target == ROOT_NAME {
            self.cursor = self.root;
            return Ok(());
        }

        if target == ".." {
            self.cursor = self.directory(self.cursor)?.parent();
            return Ok(());
        }

        let child = self
            .directory(self.cursor)?
            .entry(target)
            .ok_or_else(|| FsError::DirectoryNotFound(target.to_string()))?;

        match self.nodes.get(&child) {
            Some(Node::Directory(_)) => {
                self.cursor = child;
                Ok(())
            }
            Some(Node::File(_)) => Err(FsError::NotADirectory(target.to_string())),
            None => Err(FsError::NodeMissing(child)),
        }
    }

    /// Creates a file under the cursor
    pub fn create_file(&mut self, name: &str, size: u64) -> Result<NodeId, FsError> {
        self.add_child(name, Node::File(FileNode::new(name, size)))
    }

    /// Creates an empty directory under the cursor
    pub fn create_directory(&mut self, name: &str) -> Result<NodeId, FsError> {
        let node = Node::Directory(DirectoryNode::new(name, self.cursor));
        self.add_child(name, node)
    }

    /// Inserts a new child entry under the cursor
    fn add_child(&mut self, name: &str, node: Node) -> Result<NodeId, FsError> {
        validate_entry_name(name)?;

        if self.directory(self.cursor)?.entry(name).is_some() {
            return Err(FsError::DuplicateName(name.to_string()));
        }

        let id = NodeId::new();
        self.nodes.insert(id, node);

        match self.nodes.get_mut(&self.cursor) {
            Some(Node::Directory(dir)) => {
                dir.add_entry(name, id);
                Ok(id)
            }
            // the cursor invariant makes these unreachable
            Some(Node::File(file)) => Err(FsError::NotADirectory(file.name.clone())),
            None => Err(FsError::NodeMissing(self.cursor)),
        }
    }

    /// Folds one transcript event into the tree
    pub fn apply(&mut self, event: &TerminalEvent) -> Result<(), FsError> {
        match event {
            TerminalEvent::ChangeDirectory { target } => self.change_directory(target),
            // listing carries no state of its own
            TerminalEvent::ListDirectory => Ok(()),
            TerminalEvent::ObserveSubdirectory { name } => {
                self.create_directory(name).map(|_| ())
            }
            TerminalEvent::ObserveFile { name, size } => {
                self.create_file(name, *size).map(|_| ())
            }
        }
    }

    /// Folds a whole event sequence, stopping at the first error
    pub fn replay<'a, I>(&mut self, events: I) -> Result<(), FsError>
    where
        I: IntoIterator<Item = &'a TerminalEvent>,
    {
        for event in events {
            self.apply(event)?;
        }
        Ok(())
    }
}
