// crates/clear-attribute-config/src/lib.rs
// ============================================================================
// Module: Clear Attribute Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for clear-attribute.toml semantics.
// Dependencies: clear-attribute-core, serde, toml
// ============================================================================

//! ## Overview
//! `clear-attribute-config` defines the configuration model for the
//! `clear-attribute` command: the catalog database, the operational log sink,
//! and the exit status policy. Validation is strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
