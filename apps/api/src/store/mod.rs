//! Document store: named collections of JSON documents behind a pluggable trait.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>` built at startup:
//! `PgDocumentStore` (JSONB rows in PostgreSQL) or `InMemoryDocumentStore`.

pub mod memory;
pub mod postgres;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

pub use memory::InMemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A document body: top-level field name to JSON value.
pub type Document = Map<String, Value>;

/// The named collections the gateway knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Profile,
    Experience,
    Education,
    Others,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Profile,
        Collection::Experience,
        Collection::Education,
        Collection::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Profile => "profile",
            Collection::Experience => "experience",
            Collection::Education => "education",
            Collection::Others => "others",
        }
    }

    /// Singleton collections hold at most one document, written by upsert.
    pub fn is_singleton(&self) -> bool {
        matches!(self, Collection::Profile)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown collection '{0}'")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

/// Opaque record identifier assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4())
    }

    /// Fixed id under which a singleton collection keeps its one document.
    pub fn singleton() -> Self {
        RecordId(Uuid::nil())
    }

    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        Uuid::parse_str(raw.trim())
            .map(RecordId)
            .map_err(|_| StoreError::MalformedId(raw.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored document together with its id. Serialises as the document body
/// plus an `_id` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub data: Document,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Malformed record id '{0}'")]
    MalformedId(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored document {0} is not a JSON object")]
    UnexpectedShape(String),
}

/// CRUD over named collections. Every method is a single logical operation
/// against one collection; none of them retries.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// First document of the collection, if any.
    async fn find_one(&self, collection: Collection) -> Result<Option<Record>, StoreError>;

    /// Every document of the collection in insertion order. No filter, no paging.
    async fn find_all(&self, collection: Collection) -> Result<Vec<Record>, StoreError>;

    async fn insert_one(
        &self,
        collection: Collection,
        data: Document,
    ) -> Result<RecordId, StoreError>;

    /// Merges `data` into the collection's single document, creating it if absent.
    async fn upsert_singleton(
        &self,
        collection: Collection,
        data: Document,
    ) -> Result<RecordId, StoreError>;

    /// Shallow merge of `patch` onto the document with `id`. Returns whether a
    /// document matched.
    async fn update_fields(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> Result<bool, StoreError>;

    /// Deletes at most one document. Returns whether one was deleted.
    async fn delete_one(&self, collection: Collection, id: &str) -> Result<bool, StoreError>;
}

/// Top-level `$set` merge: keys in `patch` overwrite keys in `target`.
pub(crate) fn merge_top_level(target: &mut Document, patch: Document) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}
