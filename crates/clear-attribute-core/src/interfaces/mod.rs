// crates/clear-attribute-core/src/interfaces/mod.rs
// ============================================================================
// Module: Clear Attribute Interfaces
// Description: Collaborator traits for catalog storage, logging, time, and I/O.
// Purpose: Keep the orchestrator independent of any database or terminal.
// Dependencies: crate::core, serde, thiserror, time
// ============================================================================

//! ## Overview
//! The orchestrator reaches every external resource through these traits:
//! [`CatalogStore`] for metadata reads and the value update, [`LogSink`] for
//! the operational log, [`Clock`] for timestamps, and [`Terminal`] for the
//! confirmation prompt and status lines. Hosts pass concrete implementations
//! into [`crate::runtime::AttributeNuller`] explicitly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

use crate::core::AttributeCode;
use crate::core::AttributeId;
use crate::core::BackendType;

// ============================================================================
// SECTION: Catalog Store
// ============================================================================

/// Catalog store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("catalog store io error: {0}")]
    Io(String),
    /// Store rejected the request as invalid.
    #[error("catalog store invalid request: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("catalog store error: {0}")]
    Store(String),
}

/// Attribute row as read from the attribute registry.
///
/// The id is kept in its raw storage form; conversion to [`AttributeId`]
/// happens when the update is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    /// Raw `attribute_id` column value.
    pub attribute_id: i64,
    /// Attribute code the row was matched on.
    pub attribute_code: AttributeCode,
    /// Declared backend type.
    pub backend_type: BackendType,
}

/// EAV catalog metadata and value storage.
pub trait CatalogStore {
    /// Returns the physical name for a logical table (applies any prefix).
    fn table_name(&self, logical: &str) -> String;

    /// Looks up the numeric id of an entity type by its code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the lookup fails. A missing row is
    /// `Ok(None)`.
    fn entity_type_id(&self, entity_type_code: &str) -> Result<Option<i64>, StoreError>;

    /// Looks up an attribute by entity type id and code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the lookup fails. A missing row is
    /// `Ok(None)`.
    fn attribute(
        &self,
        entity_type_id: i64,
        attribute_code: &AttributeCode,
    ) -> Result<Option<AttributeRecord>, StoreError>;

    /// Sets `value` to NULL on every row of `table` with the given attribute
    /// id, inside one transaction. Returns the number of rows touched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the update or commit fails; nothing is
    /// committed in that case.
    fn null_values(&self, table: &str, attribute_id: AttributeId) -> Result<usize, StoreError>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    fn table_name(&self, logical: &str) -> String {
        (**self).table_name(logical)
    }

    fn entity_type_id(&self, entity_type_code: &str) -> Result<Option<i64>, StoreError> {
        (**self).entity_type_id(entity_type_code)
    }

    fn attribute(
        &self,
        entity_type_id: i64,
        attribute_code: &AttributeCode,
    ) -> Result<Option<AttributeRecord>, StoreError> {
        (**self).attribute(entity_type_id, attribute_code)
    }

    fn null_values(&self, table: &str, attribute_id: AttributeId) -> Result<usize, StoreError> {
        (**self).null_values(table, attribute_id)
    }
}

// ============================================================================
// SECTION: Operational Log
// ============================================================================

/// Log severity, named after the PSR-3 levels used by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Debug detail.
    Debug,
    /// Routine information.
    Info,
    /// Normal but significant.
    Notice,
    /// Unusual condition.
    Warning,
    /// Runtime error.
    Error,
    /// Critical condition.
    Critical,
    /// Action must be taken immediately.
    Alert,
    /// System is unusable.
    Emergency,
}

/// Operational log event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: i128,
    /// Event severity.
    pub severity: Severity,
    /// Free-text message.
    pub message: String,
    /// Attribute id the event concerns, when known.
    pub attribute_id: Option<u32>,
    /// Physical table the event concerns, when known.
    pub table: Option<String>,
}

/// Operational log sink.
pub trait LogSink {
    /// Records a log event. Sinks swallow their own write failures.
    fn record(&self, event: &LogEvent);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn record(&self, event: &LogEvent) {
        (**self).record(event);
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn record(&self, event: &LogEvent) {
        (**self).record(event);
    }
}

// ============================================================================
// SECTION: Clock
// ============================================================================

/// Source of the current time.
pub trait Clock {
    /// Returns the current instant in UTC.
    fn now_utc(&self) -> OffsetDateTime;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_utc(&self) -> OffsetDateTime {
        (**self).now_utc()
    }
}

// ============================================================================
// SECTION: Terminal
// ============================================================================

/// Terminal interaction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("terminal error: {0}")]
pub struct TerminalError(pub String);

/// Status line kinds emitted while nulling an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    /// Work is starting.
    Start,
    /// The update is about to run.
    Setting {
        /// Raw attribute id being nulled.
        attribute_id: i64,
        /// Physical table being updated.
        table: String,
    },
    /// Work finished.
    Finish,
    /// The attribute code has no value table to clear.
    AttributeNotFound,
    /// The update was refused before touching storage.
    NullRejected,
    /// The update failed.
    NullFailed {
        /// Underlying error text.
        error: String,
    },
}

/// Timestamped status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// When the line was produced.
    pub at: OffsetDateTime,
    /// What happened.
    pub kind: ReportKind,
}

/// Interactive terminal used for confirmation and status output.
pub trait Terminal {
    /// Asks the operator to confirm nulling `attribute_code`. The default
    /// answer is "no".
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError`] when the prompt cannot be shown or read.
    fn confirm(&mut self, attribute_code: &AttributeCode) -> Result<bool, TerminalError>;

    /// Writes one status line.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError`] when the line cannot be written.
    fn report(&mut self, line: &ReportLine) -> Result<(), TerminalError>;
}
