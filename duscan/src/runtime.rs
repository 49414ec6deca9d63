//! The analysis runtime
//!
//! Ties the member crates together: parse, replay, query, report.

use crate::report::AnalysisReport;
use fs_tree::{FileSystem, FsError};
use fs_usage::{smallest_deletion_candidate, usage_summary, UsageError};
use replay_log::{EventLog, LogEntry, LogLevel};
use thiserror::Error;
use transcript::{TerminalEvent, Transcript, TranscriptError};

/// Analysis runtime error types
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    #[error("Replay failed at step {step}: {source}")]
    Replay { step: usize, source: FsError },

    #[error("Query error: {0}")]
    Usage(#[from] UsageError),
}

/// Analysis configuration
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Total disk capacity in bytes
    pub disk_size: u64,
    /// Directory-size threshold for the bounded sum
    pub max_size: u64,
    /// Free space the update needs
    pub update_requirement: u64,
    /// Minimum level kept in the replay log
    pub log_level: LogLevel,
    /// Render the report as JSON instead of text
    pub json: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            disk_size: 70_000_000,
            max_size: 100_000,
            update_requirement: 30_000_000,
            log_level: LogLevel::Info,
            json: false,
        }
    }
}

/// The analysis runtime
///
/// Owns the configuration and the replay log; the tree itself lives only
/// for the duration of one [`run`](AnalysisRuntime::run).
#[derive(Debug)]
pub struct AnalysisRuntime {
    /// Configuration
    config: AnalysisConfig,
    /// Structured replay log
    log: EventLog,
}

impl AnalysisRuntime {
    /// Creates a new runtime
    pub fn new(config: AnalysisConfig) -> Self {
        let log = EventLog::new(config.log_level);
        Self { config, log }
    }

    /// Returns the collected replay log
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Runs the full analysis over a parsed transcript
    pub fn run(&mut self, transcript: &Transcript) -> Result<AnalysisReport, RuntimeError> {
        let fs = self.replay(transcript)?;

        let summary = usage_summary(&fs, self.config.max_size)?;
        self.log.record(
            LogEntry::new(LogLevel::Info, "usage summary")
                .with_field("total_used", summary.total_used.to_string())
                .with_field("sum_under_max", summary.sum_under_max.to_string()),
        );

        let candidate =
            smallest_deletion_candidate(&fs, summary.total_used, self.config.update_requirement)?;
        self.log.record(
            LogEntry::new(LogLevel::Info, "deletion candidate")
                .with_field("path", candidate.path.clone())
                .with_field("size", candidate.size.to_string()),
        );

        Ok(AnalysisReport {
            disk_size: self.config.disk_size,
            max_size: self.config.max_size,
            update_requirement: self.config.update_requirement,
            summary,
            candidate,
        })
    }

    /// Parses `text` and runs the full analysis
    pub fn run_text(&mut self, text: &str) -> Result<AnalysisReport, RuntimeError> {
        let transcript = Transcript::from_text(text)?;
        self.run(&transcript)
    }

    /// Builds the tree by folding the transcript into it
    fn replay(&mut self, transcript: &Transcript) -> Result<FileSystem, RuntimeError> {
        let mut fs = FileSystem::new(self.config.disk_size);

        for (index, event) in transcript.events().enumerate() {
            let step = index + 1;
            fs.apply(event)
                .map_err(|source| RuntimeError::Replay { step, source })?;
            self.log.record(
                LogEntry::new(LogLevel::Debug, describe_event(event)).with_step(step),
            );
        }

        self.log.record(
            LogEntry::new(LogLevel::Info, "replay finished")
                .with_field("events", transcript.remaining().to_string()),
        );
        Ok(fs)
    }
}

/// One-line description of an event for the replay log
fn describe_event(event: &TerminalEvent) -> String {
    match event {
        TerminalEvent::ChangeDirectory { target } => format!("cd {target}"),
        TerminalEvent::ListDirectory => "ls".to_string(),
        TerminalEvent::ObserveSubdirectory { name } => format!("observed dir {name}"),
        TerminalEvent::ObserveFile { name, size } => {
            format!("observed file {name} ({size} bytes)")
        }
    }
}
