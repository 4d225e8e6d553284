// crates/clear-attribute-store-sqlite/src/store.rs
// ============================================================================
// Module: SQLite Catalog Store
// Description: CatalogStore over an existing EAV catalog database.
// Purpose: Resolve attribute metadata and null attribute values in SQLite.
// Dependencies: clear-attribute-core, rusqlite, thiserror
// ============================================================================

//! ## Overview
//! [`SqliteCatalogStore`] opens an existing catalog database (it never
//! creates one), checks that the attribute registry tables exist, and serves
//! the two metadata lookups plus the transactional value update. Table names
//! are spliced into SQL only after identifier validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clear_attribute_core::AttributeCode;
use clear_attribute_core::AttributeId;
use clear_attribute_core::AttributeRecord;
use clear_attribute_core::BackendType;
use clear_attribute_core::CatalogStore;
use clear_attribute_core::StoreError;
use clear_attribute_core::TablePrefix;
use rusqlite::Connection;
use rusqlite::OpenFlags;
use rusqlite::OptionalExtension;
use rusqlite::params;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Entity type registry table.
const ENTITY_TYPE_TABLE: &str = "eav_entity_type";
/// Attribute registry table.
const ATTRIBUTE_TABLE: &str = "eav_attribute";
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a table identifier.
const MAX_TABLE_NAME_LENGTH: usize = 64;

// ============================================================================
// SECTION: Config
// ============================================================================

/// Configuration for the `SQLite` catalog store.
#[derive(Debug, Clone)]
pub struct SqliteCatalogConfig {
    /// Path to the catalog database file.
    pub path: PathBuf,
    /// Busy timeout in milliseconds.
    pub busy_timeout_ms: u64,
    /// Prefix applied to every table name.
    pub table_prefix: TablePrefix,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// `SQLite` catalog store errors.
#[derive(Debug, Error)]
pub enum SqliteStoreError {
    /// Store I/O error.
    #[error("sqlite catalog io error: {0}")]
    Io(String),
    /// `SQLite` engine error.
    #[error("sqlite catalog db error: {0}")]
    Db(String),
    /// Catalog schema is missing required tables.
    #[error("sqlite catalog schema error: {0}")]
    Schema(String),
    /// Invalid request or configuration.
    #[error("sqlite catalog invalid data: {0}")]
    Invalid(String),
}

impl From<SqliteStoreError> for StoreError {
    fn from(error: SqliteStoreError) -> Self {
        match error {
            SqliteStoreError::Io(message) => Self::Io(message),
            SqliteStoreError::Db(message) => Self::Store(message),
            SqliteStoreError::Schema(message) | SqliteStoreError::Invalid(message) => {
                Self::Invalid(message)
            }
        }
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// `SQLite`-backed EAV catalog store.
pub struct SqliteCatalogStore {
    /// Prefix applied to every table name.
    table_prefix: TablePrefix,
    /// Connection reused for every query of the invocation.
    connection: Mutex<Connection>,
}

impl SqliteCatalogStore {
    /// Opens an existing catalog database.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteStoreError`] when the file is missing, cannot be
    /// opened, or lacks the attribute registry tables.
    pub fn open(config: SqliteCatalogConfig) -> Result<Self, SqliteStoreError> {
        validate_store_path(&config.path)?;
        let connection = open_connection(&config)?;
        verify_schema(&connection, &config.table_prefix)?;
        Ok(Self {
            table_prefix: config.table_prefix,
            connection: Mutex::new(connection),
        })
    }

    /// Looks up an entity type id.
    fn load_entity_type_id(&self, entity_type_code: &str) -> Result<Option<i64>, SqliteStoreError> {
        let table = self.table_prefix.apply(ENTITY_TYPE_TABLE);
        let guard = self.lock()?;
        guard
            .query_row(
                &format!(
                    "SELECT entity_type_id FROM \"{table}\" WHERE entity_type_code = ?1 LIMIT 1"
                ),
                params![entity_type_code],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))
    }

    /// Looks up an attribute row by entity type and code.
    fn load_attribute(
        &self,
        entity_type_id: i64,
        attribute_code: &AttributeCode,
    ) -> Result<Option<AttributeRecord>, SqliteStoreError> {
        let table = self.table_prefix.apply(ATTRIBUTE_TABLE);
        let guard = self.lock()?;
        let row: Option<(i64, Option<String>)> = guard
            .query_row(
                &format!(
                    "SELECT attribute_id, backend_type FROM \"{table}\" WHERE attribute_code = ?1 \
                     AND entity_type_id = ?2 LIMIT 1"
                ),
                params![attribute_code.as_str(), entity_type_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        Ok(row.map(|(attribute_id, backend_type)| AttributeRecord {
            attribute_id,
            attribute_code: attribute_code.clone(),
            backend_type: backend_type.map_or(BackendType::Static, |label| BackendType::parse(&label)),
        }))
    }

    /// Nulls attribute values inside one transaction.
    fn update_null(&self, table: &str, attribute_id: AttributeId) -> Result<usize, SqliteStoreError> {
        validate_table_name(table)?;
        let mut guard = self.lock()?;
        let tx = guard.transaction().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        let rows = tx
            .execute(
                &format!("UPDATE \"{table}\" SET value = NULL WHERE attribute_id = ?1"),
                params![attribute_id.get()],
            )
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        Ok(rows)
    }

    /// Locks the shared connection.
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, SqliteStoreError> {
        self.connection.lock().map_err(|_| SqliteStoreError::Db("mutex poisoned".to_string()))
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn table_name(&self, logical: &str) -> String {
        self.table_prefix.apply(logical)
    }

    fn entity_type_id(&self, entity_type_code: &str) -> Result<Option<i64>, StoreError> {
        self.load_entity_type_id(entity_type_code).map_err(StoreError::from)
    }

    fn attribute(
        &self,
        entity_type_id: i64,
        attribute_code: &AttributeCode,
    ) -> Result<Option<AttributeRecord>, StoreError> {
        self.load_attribute(entity_type_id, attribute_code).map_err(StoreError::from)
    }

    fn null_values(&self, table: &str, attribute_id: AttributeId) -> Result<usize, StoreError> {
        self.update_null(table, attribute_id).map_err(StoreError::from)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates that the catalog path names an existing file.
fn validate_store_path(path: &Path) -> Result<(), SqliteStoreError> {
    let path_string = path.display().to_string();
    if path_string.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(SqliteStoreError::Invalid("catalog path exceeds length limit".to_string()));
    }
    for component in path.components() {
        let name = component.as_os_str().to_string_lossy();
        if name.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(SqliteStoreError::Invalid(
                "catalog path contains an overlong component".to_string(),
            ));
        }
    }
    if path.is_dir() {
        return Err(SqliteStoreError::Invalid(
            "catalog path must be a file, not a directory".to_string(),
        ));
    }
    if !path.is_file() {
        return Err(SqliteStoreError::Io(format!("catalog database not found: {path_string}")));
    }
    Ok(())
}

/// Opens the catalog connection without creating a new database.
fn open_connection(config: &SqliteCatalogConfig) -> Result<Connection, SqliteStoreError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
    let connection = Connection::open_with_flags(&config.path, flags)
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(connection)
}

/// Verifies the attribute registry tables exist.
fn verify_schema(connection: &Connection, prefix: &TablePrefix) -> Result<(), SqliteStoreError> {
    for logical in [ENTITY_TYPE_TABLE, ATTRIBUTE_TABLE] {
        let table = prefix.apply(logical);
        let present: Option<i64> = connection
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        if present.is_none() {
            return Err(SqliteStoreError::Schema(format!("missing table {table}")));
        }
    }
    Ok(())
}

/// Validates a table identifier before it is spliced into SQL.
fn validate_table_name(table: &str) -> Result<(), SqliteStoreError> {
    let valid = !table.is_empty()
        && table.len() <= MAX_TABLE_NAME_LENGTH
        && table.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(SqliteStoreError::Invalid(format!("invalid table name: {table}")))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::validate_table_name;

    #[test]
    fn table_names_must_be_plain_identifiers() {
        assert!(validate_table_name("catalog_product_entity_int").is_ok());
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("x\"; DROP TABLE eav_attribute; --").is_err());
        assert!(validate_table_name(&"t".repeat(65)).is_err());
    }
}
