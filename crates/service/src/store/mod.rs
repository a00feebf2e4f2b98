//! Document store seam.
//!
//! The real database is an external collaborator; handlers only ever see
//! the `Collection` trait, injected as `Arc<dyn Collection>`. The bundled
//! implementation persists each collection as a JSON file.

pub mod json;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ServiceError;
use crate::query::Filter;

pub use json::JsonCollection;

/// A schemaless document. Identifiers live under `_id`.
pub type Document = Map<String, Value>;

/// Insertion acknowledgement, shaped like the original store's reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertOutcome {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

/// Update acknowledgement. `modified_count` counts only updates that
/// changed at least one field value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
    #[serde(rename = "upsertedId", skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Deletion acknowledgement. Deleting an absent id is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

/// One named document collection (Services or Bookings).
#[async_trait]
pub trait Collection: Send + Sync {
    /// Insert a document, assigning a fresh `_id`.
    async fn insert_one(&self, doc: Document) -> Result<InsertOutcome, ServiceError>;

    /// Exact identifier lookup.
    async fn find_one(&self, id: &str) -> Result<Option<Document>, ServiceError>;

    /// All documents matching the filter; unbounded, no defined order.
    async fn find(&self, filter: &Filter) -> Result<Vec<Document>, ServiceError>;

    /// Merge `patch` into the document with the given id. With `upsert`,
    /// a missing id creates a new document holding the patch plus `_id`.
    async fn update_one(
        &self,
        id: &str,
        patch: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, ServiceError>;

    /// Delete by id; idempotent.
    async fn delete_one(&self, id: &str) -> Result<DeleteOutcome, ServiceError>;
}
