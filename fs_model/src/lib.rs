//! # Filesystem Model
//!
//! This crate defines the node model for the simulated filesystem tree.
//!
//! ## Philosophy
//!
//! - **Closed variants over dynamic dispatch**: A node is either a file or
//!   a directory, and every traversal site matches exhaustively.
//! - **Identity over pointers**: Nodes refer to each other through stable
//!   [`NodeId`]s into a backing arena, never through owning pointers.
//! - **Ownership stays a tree**: Parent links are plain ids with no
//!   destructor responsibility; the root's parent is its own id.
//!
//! ## Key Types
//!
//! - [`NodeId`]: Stable identifier for a node in the tree arena
//! - [`Node`]: Closed file/directory variant
//! - [`FileNode`], [`DirectoryNode`]: The two node payloads

pub mod name;
pub mod node;

pub use name::{validate_entry_name, NameError};
pub use node::{DirectoryNode, FileNode, Node, NodeId};
