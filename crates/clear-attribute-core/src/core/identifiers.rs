// crates/clear-attribute-core/src/core/identifiers.rs
// ============================================================================
// Module: Catalog Identifiers
// Description: Typed attribute codes, attribute ids, and table prefixes.
// Purpose: Reject malformed catalog identifiers at the boundary.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Identifiers used to address EAV attribute metadata. Attribute codes are
//! human-readable and validated for shape only; attribute ids are the non-zero
//! numeric keys assigned by the catalog. Table prefixes follow the host
//! platform installer rule so they can be spliced into SQL identifiers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroU32;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Entity type code owning every attribute this crate touches.
pub const PRODUCT_ENTITY_TYPE_CODE: &str = "catalog_product";
/// Maximum attribute code length (matches the `eav_attribute` column width).
const MAX_ATTRIBUTE_CODE_LENGTH: usize = 255;
/// Maximum table prefix length accepted by the host platform installer.
const MAX_TABLE_PREFIX_LENGTH: usize = 5;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Identifier validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Attribute code was empty or whitespace.
    #[error("attribute code must be non-empty")]
    EmptyAttributeCode,
    /// Attribute code exceeded the column width.
    #[error("attribute code exceeds {max} characters")]
    AttributeCodeTooLong {
        /// Maximum allowed characters.
        max: usize,
    },
    /// Attribute code contained whitespace or control characters.
    #[error("attribute code contains whitespace or control characters")]
    AttributeCodeCharacters,
    /// Table prefix violated the installer rule.
    #[error("table prefix {0} must start with a lowercase letter and contain only [a-z0-9_]")]
    TablePrefixCharacters(String),
    /// Table prefix exceeded the maximum length.
    #[error("table prefix exceeds {max} characters")]
    TablePrefixTooLong {
        /// Maximum allowed characters.
        max: usize,
    },
}

// ============================================================================
// SECTION: Attribute Code
// ============================================================================

/// Human-readable attribute code (for example `special_price`).
///
/// # Invariants
/// - Never empty.
/// - Contains no whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttributeCode(String);

impl AttributeCode {
    /// Parses an attribute code.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the code is empty, too long, or
    /// contains whitespace.
    pub fn parse(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(IdentifierError::EmptyAttributeCode);
        }
        if value.chars().count() > MAX_ATTRIBUTE_CODE_LENGTH {
            return Err(IdentifierError::AttributeCodeTooLong {
                max: MAX_ATTRIBUTE_CODE_LENGTH,
            });
        }
        if value.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
            return Err(IdentifierError::AttributeCodeCharacters);
        }
        Ok(Self(value))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for AttributeCode {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::str::FromStr for AttributeCode {
    type Err = IdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<AttributeCode> for String {
    fn from(value: AttributeCode) -> Self {
        value.0
    }
}

// ============================================================================
// SECTION: Attribute Id
// ============================================================================

/// Numeric attribute identifier assigned by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(NonZeroU32);

impl AttributeId {
    /// Creates an attribute id from a non-zero value.
    #[must_use]
    pub const fn new(value: NonZeroU32) -> Self {
        Self(value)
    }

    /// Converts a raw storage value, returning `None` for zero, negative, or
    /// out-of-range ids.
    #[must_use]
    pub fn from_raw(value: i64) -> Option<Self> {
        u32::try_from(value).ok().and_then(NonZeroU32::new).map(Self)
    }

    /// Returns the id as an unsigned integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Table Prefix
// ============================================================================

/// Database table prefix prepended to every logical table name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TablePrefix(String);

impl TablePrefix {
    /// Parses a table prefix. The empty string means "no prefix".
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the prefix is too long or does not
    /// match `^[a-z][a-z0-9_]*$`.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        if value.is_empty() {
            return Ok(Self::default());
        }
        if value.len() > MAX_TABLE_PREFIX_LENGTH {
            return Err(IdentifierError::TablePrefixTooLong {
                max: MAX_TABLE_PREFIX_LENGTH,
            });
        }
        let mut chars = value.chars();
        let starts_with_letter = chars.next().is_some_and(|ch| ch.is_ascii_lowercase());
        let rest_valid =
            chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_');
        if !(starts_with_letter && rest_valid) {
            return Err(IdentifierError::TablePrefixCharacters(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the physical name for a logical table.
    #[must_use]
    pub fn apply(&self, logical: &str) -> String {
        format!("{}{logical}", self.0)
    }
}

impl fmt::Display for TablePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions.")]

    use super::*;

    #[test]
    fn attribute_code_rejects_blank_and_spaced_values() {
        assert_eq!(AttributeCode::parse(""), Err(IdentifierError::EmptyAttributeCode));
        assert_eq!(AttributeCode::parse("   "), Err(IdentifierError::EmptyAttributeCode));
        assert_eq!(
            AttributeCode::parse("special price"),
            Err(IdentifierError::AttributeCodeCharacters)
        );
        assert_eq!(AttributeCode::parse("special_price").unwrap().as_str(), "special_price");
    }

    #[test]
    fn attribute_code_rejects_overlong_values() {
        let code = "a".repeat(MAX_ATTRIBUTE_CODE_LENGTH + 1);
        assert!(matches!(
            AttributeCode::parse(code),
            Err(IdentifierError::AttributeCodeTooLong { .. })
        ));
    }

    #[test]
    fn attribute_id_from_raw_rejects_zero_and_negative() {
        assert_eq!(AttributeId::from_raw(0), None);
        assert_eq!(AttributeId::from_raw(-7), None);
        assert_eq!(AttributeId::from_raw(i64::from(u32::MAX) + 1), None);
        assert_eq!(AttributeId::from_raw(42).map(AttributeId::get), Some(42));
    }

    #[test]
    fn table_prefix_follows_installer_rule() {
        assert_eq!(TablePrefix::parse("").unwrap().apply("eav_attribute"), "eav_attribute");
        assert_eq!(TablePrefix::parse("mg_").unwrap().apply("eav_attribute"), "mg_eav_attribute");
        assert!(TablePrefix::parse("1mg").is_err());
        assert!(TablePrefix::parse("Mg_").is_err());
        assert!(TablePrefix::parse("mg;--").is_err());
        assert!(TablePrefix::parse("abcdef").is_err());
    }
}
