//! Store contract for student records

use crate::core::error::RosterResult;
use crate::core::student::{NewStudent, StudentPatch, StudentRecord};
use async_trait::async_trait;

/// Record-store adapter contract.
///
/// Implementations wrap a document-store collection and expose the five
/// operations a student-record manager must provide. Record ids are opaque
/// strings assigned by the adapter at insert time; an unknown or malformed
/// id surfaces as [`StudentError::NotFound`].
///
/// [`StudentError::NotFound`]: crate::core::error::StudentError::NotFound
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a new record, returning the stored version with its assigned id.
    async fn create(&self, new: NewStudent) -> RosterResult<StudentRecord>;

    /// Fetch a record by id.
    ///
    /// Fails with `StudentError::NotFound` if no record carries that id.
    async fn get(&self, id: &str) -> RosterResult<StudentRecord>;

    /// List all records.
    ///
    /// Fails with `StudentError::NoneRegistered` when the collection is
    /// empty: an empty collection is reported as an error, not as an empty
    /// sequence.
    async fn list(&self) -> RosterResult<Vec<StudentRecord>>;

    /// Apply a partial update atomically, returning the post-update record.
    ///
    /// The caller never observes a stale pre-update value. Fails with
    /// `StudentError::NotFound` if no record carries that id.
    async fn update(&self, id: &str, patch: StudentPatch) -> RosterResult<StudentRecord>;

    /// Remove a record, returning it as it existed before deletion.
    ///
    /// Fails with `StudentError::NotFound` if no record carries that id.
    async fn delete(&self, id: &str) -> RosterResult<StudentRecord>;
}
