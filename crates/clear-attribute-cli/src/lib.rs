// crates/clear-attribute-cli/src/lib.rs
// ============================================================================
// Module: Clear Attribute CLI Library
// Description: Shared helpers for the clear-attribute binary.
// Purpose: Expose the message catalog, log sinks, and console terminal.
// Dependencies: clear-attribute-config, clear-attribute-core, serde_json
// ============================================================================

//! ## Overview
//! Library half of the `clear-attribute` binary. The binary wires these
//! pieces to the `SQLite` catalog store and the core nuller.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
pub mod logging;
pub mod terminal;

#[cfg(test)]
mod tests;
