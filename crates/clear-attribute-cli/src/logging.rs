// crates/clear-attribute-cli/src/logging.rs
// ============================================================================
// Module: Operational Log Sinks
// Description: JSON-line log sinks for nulling events.
// Purpose: Route LogEvent records to stderr, a file, or nowhere.
// Dependencies: clear-attribute-config, clear-attribute-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Each [`LogEvent`] is serialized as one JSON object per line. Sinks swallow
//! their own write failures so logging never changes a run's outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use clear_attribute_config::LogSinkKind;
use clear_attribute_config::LoggingConfig;
use clear_attribute_core::LogEvent;
use clear_attribute_core::LogSink;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building a log sink.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    #[error("{path}: {error}")]
    Open {
        /// Log file path.
        path: PathBuf,
        /// Underlying I/O error text.
        error: String,
    },
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Log sink that writes JSON lines to stderr.
pub struct StderrLogSink;

impl LogSink for StderrLogSink {
    fn record(&self, event: &LogEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let mut stderr = std::io::stderr();
            let _ = writeln!(&mut stderr, "{payload}");
        }
    }
}

/// Log sink that appends JSON lines to a file.
pub struct FileLogSink {
    /// Open log file.
    file: Mutex<File>,
}

impl FileLogSink {
    /// Opens `path` for appending, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError`] when the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, LoggingError> {
        let file = OpenOptions::new().create(true).append(true).open(path).map_err(|err| {
            LoggingError::Open {
                path: path.to_path_buf(),
                error: err.to_string(),
            }
        })?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileLogSink {
    fn record(&self, event: &LogEvent) {
        let Ok(payload) = serde_json::to_string(event) else {
            return;
        };
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{payload}");
        }
    }
}

/// Log sink that discards every event.
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    fn record(&self, _event: &LogEvent) {}
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the sink selected by `config`.
///
/// # Errors
///
/// Returns [`LoggingError`] when a file sink cannot be opened.
pub fn build_log_sink(config: &LoggingConfig) -> Result<Box<dyn LogSink>, LoggingError> {
    match (config.sink, &config.path) {
        (LogSinkKind::File, Some(path)) => Ok(Box::new(FileLogSink::open(path)?)),
        (LogSinkKind::File, None) => Err(LoggingError::Open {
            path: PathBuf::new(),
            error: "logging.path is required for sink = file".to_string(),
        }),
        (LogSinkKind::Stderr, _) => Ok(Box::new(StderrLogSink)),
        (LogSinkKind::None, _) => Ok(Box::new(NoopLogSink)),
    }
}
