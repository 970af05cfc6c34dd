//! In-memory implementation of StudentStore for testing and development

use crate::core::error::{RosterResult, StorageError, StudentError};
use crate::core::store::StudentStore;
use crate::core::student::{NewStudent, StudentPatch, StudentRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory student store.
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Ids are freshly generated UUIDs rendered as strings, matching the format
/// the MongoDB backend assigns.
#[derive(Clone)]
pub struct InMemoryStudentStore {
    records: Arc<RwLock<HashMap<String, StudentRecord>>>,
}

impl InMemoryStudentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(operation: &str, message: impl std::fmt::Display) -> StorageError {
    StorageError::Query {
        operation: operation.to_string(),
        message: format!("lock poisoned: {}", message),
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn create(&self, new: NewStudent) -> RosterResult<StudentRecord> {
        let record = new.into_record(Uuid::new_v4().to_string());

        let mut records = self
            .records
            .write()
            .map_err(|e| lock_error("insert", e))?;

        records.insert(record.id.clone(), record.clone());

        Ok(record)
    }

    async fn get(&self, id: &str) -> RosterResult<StudentRecord> {
        let records = self.records.read().map_err(|e| lock_error("find", e))?;

        records
            .get(id)
            .cloned()
            .ok_or_else(|| StudentError::NotFound { id: id.to_string() }.into())
    }

    async fn list(&self) -> RosterResult<Vec<StudentRecord>> {
        let records = self.records.read().map_err(|e| lock_error("find", e))?;

        if records.is_empty() {
            return Err(StudentError::NoneRegistered.into());
        }

        Ok(records.values().cloned().collect())
    }

    async fn update(&self, id: &str, patch: StudentPatch) -> RosterResult<StudentRecord> {
        let mut records = self
            .records
            .write()
            .map_err(|e| lock_error("update", e))?;

        let record = records
            .get_mut(id)
            .ok_or_else(|| StudentError::NotFound { id: id.to_string() })?;

        patch.apply(record);

        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> RosterResult<StudentRecord> {
        let mut records = self
            .records
            .write()
            .map_err(|e| lock_error("delete", e))?;

        records
            .remove(id)
            .ok_or_else(|| StudentError::NotFound { id: id.to_string() }.into())
    }
}
