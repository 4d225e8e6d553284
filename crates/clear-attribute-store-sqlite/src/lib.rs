// crates/clear-attribute-store-sqlite/src/lib.rs
// ============================================================================
// Module: SQLite Catalog Store
// Description: CatalogStore backend over an EAV catalog in SQLite.
// Purpose: Read attribute metadata and null attribute values transactionally.
// Dependencies: clear-attribute-core, rusqlite
// ============================================================================

//! ## Overview
//! This crate provides a `SQLite`-backed [`CatalogStore`] implementation for
//! product EAV catalogs. It opens an existing catalog database, verifies the
//! metadata tables are present, and runs the value update inside a single
//! transaction.
//!
//! [`CatalogStore`]: clear_attribute_core::CatalogStore

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::SqliteCatalogConfig;
pub use store::SqliteCatalogStore;
pub use store::SqliteStoreError;
