// crates/clear-attribute-core/src/core/backend.rs
// ============================================================================
// Module: Backend Types and Value Tables
// Description: Closed mapping from attribute backend type to EAV value table.
// Purpose: Make the "no update for static or unknown types" policy explicit.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each product attribute declares a backend type that decides which EAV
//! value table stores its data. Five backend types own a value table;
//! `static` attributes live on the entity row itself and unknown types are
//! carried verbatim so callers can report them.
//!
//! ## Invariants
//! - [`resolve_table`] is total: every [`BackendType`] maps to a
//!   [`TableResolution`].
//! - Only [`TableResolution::Table`] may lead to an update.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Backend Type
// ============================================================================

/// Storage category of an attribute's values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackendType {
    /// Value lives on the entity table; there is no value table.
    Static,
    /// Short strings.
    Varchar,
    /// Integers and option ids.
    Int,
    /// Long text.
    Text,
    /// Dates and timestamps.
    Datetime,
    /// Fixed-point numbers such as prices.
    Decimal,
    /// Backend type this crate does not know about.
    Unrecognized(String),
}

impl BackendType {
    /// Parses a backend type label. Unknown labels become
    /// [`BackendType::Unrecognized`]; parsing never fails.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "static" => Self::Static,
            "varchar" => Self::Varchar,
            "int" => Self::Int,
            "text" => Self::Text,
            "datetime" => Self::Datetime,
            "decimal" => Self::Decimal,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns the storage label for this backend type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static => "static",
            Self::Varchar => "varchar",
            Self::Int => "int",
            Self::Text => "text",
            Self::Datetime => "datetime",
            Self::Decimal => "decimal",
            Self::Unrecognized(label) => label,
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BackendType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for BackendType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BackendType> for String {
    fn from(value: BackendType) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// SECTION: Value Tables
// ============================================================================

/// Product EAV value tables that hold per-attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTable {
    /// `catalog_product_entity_varchar`.
    Varchar,
    /// `catalog_product_entity_int`.
    Int,
    /// `catalog_product_entity_text`.
    Text,
    /// `catalog_product_entity_datetime`.
    Datetime,
    /// `catalog_product_entity_decimal`.
    Decimal,
}

impl ValueTable {
    /// Every value table, in declaration order.
    pub const ALL: [Self; 5] = [Self::Varchar, Self::Int, Self::Text, Self::Datetime, Self::Decimal];

    /// Returns the unprefixed table name.
    #[must_use]
    pub const fn logical_name(self) -> &'static str {
        match self {
            Self::Varchar => "catalog_product_entity_varchar",
            Self::Int => "catalog_product_entity_int",
            Self::Text => "catalog_product_entity_text",
            Self::Datetime => "catalog_product_entity_datetime",
            Self::Decimal => "catalog_product_entity_decimal",
        }
    }
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.logical_name())
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Why a backend type has no value table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoTableReason {
    /// `static` attributes are stored on the entity row.
    Static,
    /// The backend type label is unknown.
    Unrecognized(String),
}

/// Outcome of mapping a backend type to a value table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableResolution {
    /// Values live in this table.
    Table(ValueTable),
    /// There is no table to update.
    NoTable(NoTableReason),
}

impl TableResolution {
    /// Returns the resolved table, if any.
    #[must_use]
    pub const fn table(&self) -> Option<ValueTable> {
        match self {
            Self::Table(table) => Some(*table),
            Self::NoTable(_) => None,
        }
    }
}

/// Maps a backend type to the value table that stores its data.
#[must_use]
pub fn resolve_table(backend_type: &BackendType) -> TableResolution {
    match backend_type {
        BackendType::Varchar => TableResolution::Table(ValueTable::Varchar),
        BackendType::Int => TableResolution::Table(ValueTable::Int),
        BackendType::Text => TableResolution::Table(ValueTable::Text),
        BackendType::Datetime => TableResolution::Table(ValueTable::Datetime),
        BackendType::Decimal => TableResolution::Table(ValueTable::Decimal),
        BackendType::Static => TableResolution::NoTable(NoTableReason::Static),
        BackendType::Unrecognized(label) => {
            TableResolution::NoTable(NoTableReason::Unrecognized(label.clone()))
        }
    }
}
