// crates/clear-attribute-cli/src/tests.rs
// ============================================================================
// Module: CLI Unit Tests
// Description: Unit tests for the catalog, terminal, and log sinks.
// Purpose: Keep operator-facing output stable.
// Dependencies: clear-attribute-cli modules
// ============================================================================

//! ## Overview
//! Groups the crate-internal unit test modules.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

mod i18n;
mod terminal;
