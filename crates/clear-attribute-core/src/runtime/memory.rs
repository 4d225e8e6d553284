// crates/clear-attribute-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory Catalog Store
// Description: Simple in-memory EAV catalog for tests and demos.
// Purpose: Provide a deterministic CatalogStore without a database.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`InMemoryCatalogStore`] models the entity type registry, the attribute
//! registry, and per-table value rows. Updates are all-or-nothing, and a
//! table can be marked as failing to exercise error paths. It is not intended
//! for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::core::AttributeCode;
use crate::core::AttributeId;
use crate::core::BackendType;
use crate::core::TablePrefix;
use crate::interfaces::AttributeRecord;
use crate::interfaces::CatalogStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One row of an EAV value table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRow {
    /// Owning entity id.
    pub entity_id: i64,
    /// Attribute id column.
    pub attribute_id: i64,
    /// Store view id.
    pub store_id: i64,
    /// Stored value.
    pub value: Option<String>,
}

/// Catalog contents guarded by the store mutex.
#[derive(Debug, Default)]
struct CatalogData {
    /// Entity type code to id.
    entity_types: BTreeMap<String, i64>,
    /// Attribute rows keyed by `(entity_type_id, attribute_code)`.
    attributes: BTreeMap<(i64, String), AttributeRecord>,
    /// Value rows keyed by physical table name.
    values: BTreeMap<String, Vec<ValueRow>>,
    /// Tables whose updates fail, with the failure message.
    failing_tables: BTreeMap<String, String>,
    /// Committed updates in order.
    updates: Vec<(String, AttributeId)>,
}

/// In-memory catalog store for tests and demos.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogStore {
    /// Prefix applied to logical table names.
    prefix: TablePrefix,
    /// Catalog contents protected by a mutex.
    data: Arc<Mutex<CatalogData>>,
}

impl InMemoryCatalogStore {
    /// Creates an empty store without a table prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that prefixes every table name.
    #[must_use]
    pub fn with_prefix(prefix: TablePrefix) -> Self {
        Self {
            prefix,
            data: Arc::default(),
        }
    }

    /// Registers an entity type.
    pub fn insert_entity_type(&self, code: &str, entity_type_id: i64) {
        self.lock().entity_types.insert(code.to_string(), entity_type_id);
    }

    /// Registers an attribute under an entity type.
    pub fn insert_attribute(
        &self,
        entity_type_id: i64,
        attribute_id: i64,
        attribute_code: AttributeCode,
        backend_type: BackendType,
    ) {
        let key = (entity_type_id, attribute_code.as_str().to_string());
        self.lock().attributes.insert(
            key,
            AttributeRecord {
                attribute_id,
                attribute_code,
                backend_type,
            },
        );
    }

    /// Appends a value row to a physical table.
    pub fn insert_value(&self, table: &str, row: ValueRow) {
        self.lock().values.entry(table.to_string()).or_default().push(row);
    }

    /// Makes every update against `table` fail with `message`.
    pub fn fail_updates_on(&self, table: &str, message: &str) {
        self.lock().failing_tables.insert(table.to_string(), message.to_string());
    }

    /// Returns a snapshot of a physical table's rows.
    #[must_use]
    pub fn values(&self, table: &str) -> Vec<ValueRow> {
        self.lock().values.get(table).cloned().unwrap_or_default()
    }

    /// Returns committed updates in order.
    #[must_use]
    pub fn updates(&self) -> Vec<(String, AttributeId)> {
        self.lock().updates.clone()
    }

    /// Locks catalog data, recovering from poisoning.
    fn lock(&self) -> MutexGuard<'_, CatalogData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn table_name(&self, logical: &str) -> String {
        self.prefix.apply(logical)
    }

    fn entity_type_id(&self, entity_type_code: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.lock().entity_types.get(entity_type_code).copied())
    }

    fn attribute(
        &self,
        entity_type_id: i64,
        attribute_code: &AttributeCode,
    ) -> Result<Option<AttributeRecord>, StoreError> {
        let key = (entity_type_id, attribute_code.as_str().to_string());
        Ok(self.lock().attributes.get(&key).cloned())
    }

    fn null_values(&self, table: &str, attribute_id: AttributeId) -> Result<usize, StoreError> {
        let mut data = self.lock();
        if let Some(message) = data.failing_tables.get(table) {
            return Err(StoreError::Store(message.clone()));
        }
        let Some(rows) = data.values.get_mut(table) else {
            return Err(StoreError::Invalid(format!("no such table: {table}")));
        };
        let target = i64::from(attribute_id.get());
        let mut touched = 0;
        for row in rows.iter_mut().filter(|row| row.attribute_id == target) {
            row.value = None;
            touched += 1;
        }
        data.updates.push((table.to_string(), attribute_id));
        Ok(touched)
    }
}
