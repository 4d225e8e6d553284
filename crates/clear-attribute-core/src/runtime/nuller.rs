// crates/clear-attribute-core/src/runtime/nuller.rs
// ============================================================================
// Module: Attribute Nuller
// Description: Orchestrates nulling every stored value of one attribute.
// Purpose: Confirm, resolve metadata and table, apply the update, report.
// Dependencies: crate::{core, interfaces}, serde, thiserror
// ============================================================================

//! ## Overview
//! [`AttributeNuller`] is a one-shot state machine:
//! `Confirming -> Resolving -> Applying -> Reporting -> Done`.
//!
//! ## Invariants
//! - The update runs only when the attribute exists and its backend type
//!   resolves to a value table.
//! - Declining the confirmation touches neither storage nor the terminal.
//! - Update failures are logged at [`Severity::Critical`] and returned as
//!   [`ApplyOutcome::Failed`]; they never escape as errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

use crate::core::AttributeCode;
use crate::core::AttributeId;
use crate::core::BackendType;
use crate::core::NoTableReason;
use crate::core::PRODUCT_ENTITY_TYPE_CODE;
use crate::core::TableResolution;
use crate::core::resolve_table;
use crate::interfaces::AttributeRecord;
use crate::interfaces::CatalogStore;
use crate::interfaces::Clock;
use crate::interfaces::LogEvent;
use crate::interfaces::LogSink;
use crate::interfaces::ReportKind;
use crate::interfaces::ReportLine;
use crate::interfaces::Severity;
use crate::interfaces::StoreError;
use crate::interfaces::Terminal;
use crate::interfaces::TerminalError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Whether the command is attached to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// An operator can answer the confirmation prompt.
    Interactive,
    /// No operator; confirmation is skipped.
    NonInteractive,
}

impl RunMode {
    /// Returns true for [`RunMode::Interactive`].
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }
}

/// How a finished run maps to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitPolicy {
    /// Success whenever the update was applied.
    #[default]
    Uniform,
    /// Success only when the update was applied in interactive mode.
    LegacyBatch,
}

impl ExitPolicy {
    /// Returns true when `outcome` should exit successfully under `mode`.
    #[must_use]
    pub const fn succeeded(self, outcome: &RunOutcome, mode: RunMode) -> bool {
        match self {
            Self::Uniform => outcome.is_success(),
            Self::LegacyBatch => outcome.is_success() && mode.is_interactive(),
        }
    }
}

/// Result of the null-value applier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The update committed.
    Applied {
        /// Rows whose value was set to NULL.
        rows_affected: usize,
    },
    /// The request was missing an id or table; storage was not touched.
    Rejected,
    /// The update failed and was not committed.
    Failed {
        /// Underlying error text.
        message: String,
    },
}

/// Terminal state of a nulling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The operator declined the confirmation prompt.
    Declined,
    /// No attribute matched the code.
    NotFound,
    /// The attribute exists but has no value table.
    NoValueTable {
        /// Raw attribute id.
        attribute_id: i64,
        /// Why no table applies.
        reason: NoTableReason,
    },
    /// The applier refused the request.
    Rejected,
    /// The update failed.
    Failed {
        /// Underlying error text.
        message: String,
    },
    /// The update committed.
    Applied {
        /// Attribute id that was nulled.
        attribute_id: AttributeId,
        /// Physical table that was updated.
        table: String,
        /// Rows whose value was set to NULL.
        rows_affected: usize,
    },
}

impl RunOutcome {
    /// Returns true when the update committed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Errors that abort a run before it can report an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NullAttributeError {
    /// Metadata lookup failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Prompt or status output failed.
    #[error(transparent)]
    Terminal(#[from] TerminalError),
}

// ============================================================================
// SECTION: Orchestrator
// ============================================================================

/// Nulls all stored values of one product attribute.
#[derive(Debug, Clone)]
pub struct AttributeNuller<S, L, C> {
    /// Catalog metadata and value storage.
    store: S,
    /// Operational log.
    log: L,
    /// Timestamp source.
    clock: C,
}

impl<S, L, C> AttributeNuller<S, L, C>
where
    S: CatalogStore,
    L: LogSink,
    C: Clock,
{
    /// Creates an orchestrator over explicit collaborators.
    #[must_use]
    pub const fn new(store: S, log: L, clock: C) -> Self {
        Self {
            store,
            log,
            clock,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Looks up product attribute metadata by code.
    ///
    /// A missing `catalog_product` entity type is treated the same as a
    /// missing attribute.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when either lookup fails.
    pub fn resolve_attribute(
        &self,
        attribute_code: &AttributeCode,
    ) -> Result<Option<AttributeRecord>, StoreError> {
        let Some(entity_type_id) = self.store.entity_type_id(PRODUCT_ENTITY_TYPE_CODE)? else {
            return Ok(None);
        };
        self.store.attribute(entity_type_id, attribute_code)
    }

    /// Resolves the physical value table for a backend type.
    ///
    /// # Errors
    ///
    /// Returns [`NoTableReason`] for `static` and unrecognized types.
    pub fn resolve_value_table(&self, backend_type: &BackendType) -> Result<String, NoTableReason> {
        match resolve_table(backend_type) {
            TableResolution::Table(table) => Ok(self.store.table_name(table.logical_name())),
            TableResolution::NoTable(reason) => Err(reason),
        }
    }

    /// Sets every value of `attribute_id` in `table` to NULL.
    ///
    /// Missing inputs yield [`ApplyOutcome::Rejected`] without touching the
    /// store. Store failures are logged as critical.
    pub fn apply_null(&self, attribute_id: Option<AttributeId>, table: Option<&str>) -> ApplyOutcome {
        let table = table.filter(|name| !name.trim().is_empty());
        let (Some(attribute_id), Some(table)) = (attribute_id, table) else {
            return ApplyOutcome::Rejected;
        };
        match self.store.null_values(table, attribute_id) {
            Ok(rows_affected) => {
                self.log.record(&self.log_event(
                    "attribute_values_nulled",
                    Severity::Info,
                    format!("set {rows_affected} value(s) to NULL"),
                    attribute_id,
                    table,
                ));
                ApplyOutcome::Applied {
                    rows_affected,
                }
            }
            Err(err) => {
                let message = err.to_string();
                self.log.record(&self.log_event(
                    "attribute_null_failed",
                    Severity::Critical,
                    message.clone(),
                    attribute_id,
                    table,
                ));
                ApplyOutcome::Failed {
                    message,
                }
            }
        }
    }

    /// Runs the full command for one attribute code.
    ///
    /// # Errors
    ///
    /// Returns [`NullAttributeError`] when metadata lookup or terminal I/O
    /// fails. Update failures are reported through [`RunOutcome::Failed`].
    pub fn run<T: Terminal + ?Sized>(
        &self,
        attribute_code: &AttributeCode,
        mode: RunMode,
        terminal: &mut T,
    ) -> Result<RunOutcome, NullAttributeError> {
        if mode.is_interactive() && !terminal.confirm(attribute_code)? {
            return Ok(RunOutcome::Declined);
        }
        self.report(terminal, ReportKind::Start)?;

        let Some(record) = self.resolve_attribute(attribute_code)? else {
            self.report(terminal, ReportKind::AttributeNotFound)?;
            return Ok(RunOutcome::NotFound);
        };
        let table = match self.resolve_value_table(&record.backend_type) {
            Ok(table) => table,
            Err(reason) => {
                self.report(terminal, ReportKind::AttributeNotFound)?;
                return Ok(RunOutcome::NoValueTable {
                    attribute_id: record.attribute_id,
                    reason,
                });
            }
        };

        self.report(
            terminal,
            ReportKind::Setting {
                attribute_id: record.attribute_id,
                table: table.clone(),
            },
        )?;
        let attribute_id = AttributeId::from_raw(record.attribute_id);
        let outcome = match (attribute_id, self.apply_null(attribute_id, Some(&table))) {
            (
                Some(attribute_id),
                ApplyOutcome::Applied {
                    rows_affected,
                },
            ) => RunOutcome::Applied {
                attribute_id,
                table,
                rows_affected,
            },
            (
                _,
                ApplyOutcome::Failed {
                    message,
                },
            ) => {
                self.report(
                    terminal,
                    ReportKind::NullFailed {
                        error: message.clone(),
                    },
                )?;
                RunOutcome::Failed {
                    message,
                }
            }
            (_, ApplyOutcome::Applied { .. } | ApplyOutcome::Rejected) => {
                self.report(terminal, ReportKind::NullRejected)?;
                RunOutcome::Rejected
            }
        };
        self.report(terminal, ReportKind::Finish)?;
        Ok(outcome)
    }

    /// Emits one timestamped status line.
    fn report<T: Terminal + ?Sized>(
        &self,
        terminal: &mut T,
        kind: ReportKind,
    ) -> Result<(), TerminalError> {
        terminal.report(&ReportLine {
            at: self.clock.now_utc(),
            kind,
        })
    }

    /// Builds an operational log event stamped with the current time.
    fn log_event(
        &self,
        event: &'static str,
        severity: Severity,
        message: String,
        attribute_id: AttributeId,
        table: &str,
    ) -> LogEvent {
        LogEvent {
            event,
            timestamp_ms: self.clock.now_utc().unix_timestamp_nanos() / 1_000_000,
            severity,
            message,
            attribute_id: Some(attribute_id.get()),
            table: Some(table.to_string()),
        }
    }
}
