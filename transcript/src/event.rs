//! Structured terminal events

use serde::{Deserialize, Serialize};

/// One structured event from a terminal transcript
///
/// Events are replayed in order against a filesystem tree; the `ls`
/// listing itself carries no state, only its `dir`/file output lines do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalEvent {
    /// Change the working directory (`/`, `..`, or a child name)
    ChangeDirectory {
        /// Target directory
        target: String,
    },

    /// List the working directory (acknowledged, no state change)
    ListDirectory,

    /// Listing output: a child directory exists
    ObserveSubdirectory {
        /// Directory name
        name: String,
    },

    /// Listing output: a child file exists
    ObserveFile {
        /// File name
        name: String,
        /// File size in bytes
        size: u64,
    },
}
