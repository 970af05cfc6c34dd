//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides the `MongoStudentStore` implementation backed by a MongoDB
//! database via `mongodb::Database`. This is the production backend; the
//! in-memory store covers tests and development.
//!
//! # Storage model
//!
//! All records live in a single `students` collection. Ids are UUID strings
//! assigned at insert time and stored under MongoDB's `_id` key, so an
//! unknown or malformed id simply matches nothing and surfaces as `NotFound`.
//!
//! # Serialization strategy
//!
//! Records are serialized via `serde_json::Value` as an intermediate format,
//! then converted to BSON documents, with the `id` field mapped to MongoDB's
//! `_id` convention. Updates go through the store's atomic
//! update-and-return primitive (`find_one_and_update` returning the
//! post-image) so callers never observe a stale pre-update value, and deletes
//! go through `find_one_and_delete` so the pre-deletion record is reported.

use crate::core::error::{RosterError, RosterResult, StorageError, StudentError};
use crate::core::store::StudentStore;
use crate::core::student::{NewStudent, StudentPatch, StudentRecord};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ReturnDocument;
use uuid::Uuid;

/// Collection holding all student records.
const COLLECTION: &str = "students";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn storage_error(operation: &str, message: impl std::fmt::Display) -> RosterError {
    StorageError::Query {
        operation: operation.to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Convert a serde_json::Value (expected to be an Object) into a BSON
/// Document, renaming `id` to `_id` for MongoDB convention.
fn json_to_document(json: serde_json::Value) -> RosterResult<Document> {
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| storage_error("encode", e))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => return Err(storage_error("encode", "expected BSON document, got non-object")),
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    Ok(doc)
}

/// Convert a BSON Document back into a serde_json::Value, renaming `_id`
/// back to `id`.
fn document_to_json(mut doc: Document) -> serde_json::Value {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

/// Convert a student record into a MongoDB document.
fn record_to_document(record: &StudentRecord) -> RosterResult<Document> {
    let json = serde_json::to_value(record).map_err(|e| storage_error("encode", e))?;
    json_to_document(json)
}

/// Convert a MongoDB document back into a student record.
fn document_to_record(doc: Document) -> RosterResult<StudentRecord> {
    let json = document_to_json(doc);
    serde_json::from_value(json).map_err(|e| storage_error("decode", e))
}

/// Build the `$set` document for a partial update, containing exactly the
/// fields present in the patch.
fn set_document(patch: &StudentPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.clone());
    }
    if let Some(age) = patch.age {
        set.insert("age", age);
    }
    if let Some(class) = &patch.class {
        set.insert("class", class.clone());
    }
    set
}

// ---------------------------------------------------------------------------
// MongoStudentStore
// ---------------------------------------------------------------------------

/// Student record store backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use roster::storage::MongoStudentStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoStudentStore::new(client.database("studentdb"));
/// let record = store.create(new_student).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoStudentStore {
    database: Database,
}

impl MongoStudentStore {
    /// Create a new `MongoStudentStore` with the given database handle.
    ///
    /// The handle is assumed to be connected; connection setup happens at
    /// process startup.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(COLLECTION)
    }
}

#[async_trait]
impl StudentStore for MongoStudentStore {
    /// Insert a new record into the collection.
    ///
    /// Assigns a fresh UUID id, inserts the document, and reads it back to
    /// return the stored version.
    async fn create(&self, new: NewStudent) -> RosterResult<StudentRecord> {
        let record = new.into_record(Uuid::new_v4().to_string());
        let doc = record_to_document(&record)?;

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| storage_error("insert", e))?;

        let stored = self
            .collection()
            .find_one(doc! { "_id": record.id.as_str() })
            .await
            .map_err(|e| storage_error("insert", e))?
            .ok_or_else(|| storage_error("insert", "record missing after insert"))?;

        document_to_record(stored)
    }

    /// Fetch a record by id.
    async fn get(&self, id: &str) -> RosterResult<StudentRecord> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| storage_error("find", e))?;

        match doc {
            Some(d) => document_to_record(d),
            None => Err(StudentError::NotFound { id: id.to_string() }.into()),
        }
    }

    /// List all records. An empty collection is an error, not an empty
    /// sequence.
    async fn list(&self) -> RosterResult<Vec<StudentRecord>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| storage_error("find", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| storage_error("find", e))?;

        if docs.is_empty() {
            return Err(StudentError::NoneRegistered.into());
        }

        docs.into_iter().map(document_to_record).collect()
    }

    /// Apply a partial update through the store's atomic update-and-return
    /// primitive, returning the post-update record.
    ///
    /// An empty patch short-circuits to a plain read; MongoDB rejects an
    /// empty `$set`.
    async fn update(&self, id: &str, patch: StudentPatch) -> RosterResult<StudentRecord> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let updated = self
            .collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_document(&patch) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| storage_error("update", e))?;

        match updated {
            Some(d) => document_to_record(d),
            None => Err(StudentError::NotFound { id: id.to_string() }.into()),
        }
    }

    /// Remove a record, returning it as it existed before deletion.
    async fn delete(&self, id: &str) -> RosterResult<StudentRecord> {
        let deleted = self
            .collection()
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(|e| storage_error("delete", e))?;

        match deleted {
            Some(d) => document_to_record(d),
            None => Err(StudentError::NotFound { id: id.to_string() }.into()),
        }
    }
}
