//! The analysis report and its renderings

use fs_usage::{DeletionCandidate, UsageSummary};
use serde::Serialize;

/// The combined answer to both accounting queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Disk capacity the analysis ran against
    pub disk_size: u64,
    /// Directory-size threshold for the bounded sum
    pub max_size: u64,
    /// Free space the update needs
    pub update_requirement: u64,
    /// Total usage and the threshold-bounded sum
    pub summary: UsageSummary,
    /// The smallest directory freeing enough space
    pub candidate: DeletionCandidate,
}

impl AnalysisReport {
    /// Renders the report as human-readable text
    pub fn render_text(&self) -> String {
        let unused = self.disk_size.saturating_sub(self.summary.total_used);
        format!(
            "Total disk usage: {} of {} bytes ({} unused)\n\
             Sum of directories under {} bytes: {}\n\
             Directory to remove for the {} byte update: {} ({} bytes)\n",
            self.summary.total_used,
            self.disk_size,
            unused,
            self.max_size,
            self.summary.sum_under_max,
            self.update_requirement,
            self.candidate.path,
            self.candidate.size,
        )
    }

    /// Renders the report as pretty-printed JSON
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
