//! # Filesystem Tree
//!
//! This crate owns the simulated filesystem tree built from a replayed
//! terminal transcript.
//!
//! ## Philosophy
//!
//! - **One mutation boundary**: Every structural invariant (name
//!   uniqueness, cursor validity, acyclicity) is enforced inside
//!   [`FileSystem`]; callers never hold references into the tree.
//! - **Cursor, not paths**: Replay is a plain fold over events; the only
//!   navigation state is the current-directory cursor.
//! - **Typed failures**: A violated invariant is reported to the caller as
//!   an [`FsError`], never a process abort, and never a partial repair.
//!
//! ## Operations
//!
//! - `change_directory(target)`: move the cursor (`/`, `..`, or a child)
//! - `create_file(name, size)`: add a file under the cursor
//! - `create_directory(name)`: add an empty directory under the cursor
//! - `apply(event)` / `replay(events)`: fold structured transcript events

pub mod error;
pub mod filesystem;

pub use error::FsError;
pub use filesystem::FileSystem;
