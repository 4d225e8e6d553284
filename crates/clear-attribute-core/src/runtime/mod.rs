// crates/clear-attribute-core/src/runtime/mod.rs
// ============================================================================
// Module: Clear Attribute Runtime
// Description: Orchestrator and in-memory catalog store.
// Purpose: Drive the confirm, resolve, apply, report sequence.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime components: [`AttributeNuller`] runs a single nulling command
//! against any [`crate::interfaces::CatalogStore`], and
//! [`InMemoryCatalogStore`] backs tests and demos.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod memory;
pub mod nuller;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use memory::InMemoryCatalogStore;
pub use memory::ValueRow;
pub use nuller::ApplyOutcome;
pub use nuller::AttributeNuller;
pub use nuller::ExitPolicy;
pub use nuller::NullAttributeError;
pub use nuller::RunMode;
pub use nuller::RunOutcome;
