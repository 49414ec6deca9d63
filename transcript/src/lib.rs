//! # Terminal Transcript
//!
//! This crate turns a recorded terminal session into structured events.
//!
//! ## Format
//!
//! Transcripts are line-based, with each line being one of:
//! - `$ cd <target>` - change directory (`/`, `..`, or a child name)
//! - `$ ls` - list the current directory
//! - `dir <name>` - listing output declaring a subdirectory
//! - `<size> <name>` - listing output declaring a file
//!
//! Blank lines are skipped. Anything else is a typed, line-numbered error.
//!
//! ## Example
//!
//! ```text
//! $ cd /
//! $ ls
//! dir a
//! 14848514 b.txt
//! $ cd a
//! ```
//!
//! ## Philosophy
//!
//! - Parsing is separate from replay: the tree consumes [`TerminalEvent`]s
//!   and never sees raw text.
//! - Errors name the offending line; a malformed transcript is rejected,
//!   never silently patched.

pub mod event;
pub mod parser;

pub use event::TerminalEvent;
pub use parser::{Transcript, TranscriptError};
