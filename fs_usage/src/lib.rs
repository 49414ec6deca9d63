//! # Disk Usage Queries
//!
//! Pure queries over a finished filesystem tree.
//!
//! ## Philosophy
//!
//! - **Read-only**: Both queries borrow the tree immutably; replay has
//!   already finished by the time they run.
//! - **One pass each**: Sizes are aggregated post-order, so no node is
//!   visited twice within a query.
//! - **Deterministic**: Sibling order is lexicographic everywhere, so the
//!   deletion search has a fixed, documented tie-break.
//!
//! ## Queries
//!
//! - [`usage_summary`]: total disk usage plus the sum of directory sizes
//!   under a threshold
//! - [`smallest_deletion_candidate`]: the smallest directory whose removal
//!   frees enough space for an update

pub mod aggregate;
pub mod candidate;
pub mod error;

pub use aggregate::{usage_summary, UsageSummary};
pub use candidate::{smallest_deletion_candidate, DeletionCandidate};
pub use error::UsageError;
