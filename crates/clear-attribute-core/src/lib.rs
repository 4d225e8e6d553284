// crates/clear-attribute-core/src/lib.rs
// ============================================================================
// Module: Clear Attribute Core Library
// Description: Public API surface for the attribute nulling core.
// Purpose: Expose catalog types, collaborator interfaces, and the orchestrator.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Clear Attribute core resolves a product attribute code to its EAV value
//! table and nulls every stored value for that attribute in one transaction.
//! It is backend-agnostic: the catalog database, operational log, clock, and
//! terminal are reached only through the traits in [`interfaces`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::AttributeRecord;
pub use interfaces::CatalogStore;
pub use interfaces::Clock;
pub use interfaces::LogEvent;
pub use interfaces::LogSink;
pub use interfaces::ReportKind;
pub use interfaces::ReportLine;
pub use interfaces::Severity;
pub use interfaces::StoreError;
pub use interfaces::Terminal;
pub use interfaces::TerminalError;
pub use runtime::ApplyOutcome;
pub use runtime::AttributeNuller;
pub use runtime::ExitPolicy;
pub use runtime::InMemoryCatalogStore;
pub use runtime::NullAttributeError;
pub use runtime::RunMode;
pub use runtime::RunOutcome;
