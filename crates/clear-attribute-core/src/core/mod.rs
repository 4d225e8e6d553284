// crates/clear-attribute-core/src/core/mod.rs
// ============================================================================
// Module: Clear Attribute Core Types
// Description: Catalog identifiers, backend types, and time helpers.
// Purpose: Group the data model shared by every crate in the workspace.
// Dependencies: serde, thiserror, time
// ============================================================================

//! ## Overview
//! Core data model for EAV attribute metadata. Nothing in this module touches
//! storage or the terminal.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod backend;
pub mod clock;
pub mod identifiers;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use backend::BackendType;
pub use backend::NoTableReason;
pub use backend::TableResolution;
pub use backend::ValueTable;
pub use backend::resolve_table;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use clock::gmt_date;
pub use identifiers::AttributeCode;
pub use identifiers::AttributeId;
pub use identifiers::IdentifierError;
pub use identifiers::PRODUCT_ENTITY_TYPE_CODE;
pub use identifiers::TablePrefix;
