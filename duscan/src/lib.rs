//! # Disk Usage Scanner
//!
//! Replays a recorded terminal session into a simulated filesystem and
//! answers the two disk-usage accounting queries over the finished tree.
//!
//! ## Philosophy
//!
//! - **The driver owns I/O**: Core crates never print; results come back
//!   as a report value and a structured log.
//! - **Phases are strict**: parse, then replay, then query. The tree is
//!   mutable only during replay.
//! - **Deterministic**: Same transcript and configuration, same report,
//!   byte for byte.
//!
//! ## Responsibilities
//!
//! The driver:
//! - Loads and parses the transcript
//! - Replays events into the tree, logging each step
//! - Runs the usage summary and the deletion candidate search
//! - Renders the report as text or JSON
//!
//! ## Non-Responsibilities
//!
//! The driver does NOT:
//! - Persist the tree anywhere
//! - Repair or re-order a malformed transcript
//! - Watch a live filesystem

pub mod report;
pub mod runtime;

pub use report::AnalysisReport;
pub use runtime::{AnalysisConfig, AnalysisRuntime, RuntimeError};
