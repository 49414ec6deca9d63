//! # Replay Log
//!
//! This crate implements structured logging for the replay driver.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not printf-style. Entries are
//! collected in memory and rendered only when the caller asks for them;
//! the core crates never print.

use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Replay step this entry belongs to (1-based, if known)
    pub step: Option<usize>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            step: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the replay step
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Renders the entry as a single line
    pub fn render(&self) -> String {
        let mut line = format!("[{}]", self.level);
        if let Some(step) = self.step {
            line.push_str(&format!(" step {step}:"));
        }
        line.push(' ');
        line.push_str(&self.message);
        for (key, value) in &self.fields {
            line.push_str(&format!(" {key}={value}"));
        }
        line
    }
}

/// An in-memory log collector with a minimum-level filter
#[derive(Debug, Clone)]
pub struct EventLog {
    min_level: LogLevel,
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Creates a collector that keeps entries at or above `min_level`
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level,
            entries: Vec::new(),
        }
    }

    /// Records an entry if it passes the level filter
    pub fn record(&mut self, entry: LogEntry) {
        if entry.level >= self.min_level {
            self.entries.push(entry);
        }
    }

    /// Returns the collected entries in record order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the number of collected entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}
