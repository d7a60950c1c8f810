use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use super::{Collection, Document, DocumentStore, Record, RecordId, StoreError};

/// Documents stored as JSONB rows of the `documents` table, keyed by
/// `(collection, id)`. See `db::ensure_schema`.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        PgDocumentStore { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    data: Value,
}

impl TryFrom<DocumentRow> for Record {
    type Error = StoreError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        match row.data {
            Value::Object(data) => Ok(Record {
                id: RecordId::from(row.id),
                data,
            }),
            _ => Err(StoreError::UnexpectedShape(row.id.to_string())),
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find_one(&self, collection: Collection) -> Result<Option<Record>, StoreError> {
        let row: Option<DocumentRow> = sqlx::query_as(
            "SELECT id, data FROM documents WHERE collection = $1 ORDER BY created_at, id LIMIT 1",
        )
        .bind(collection.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Record::try_from).transpose()
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Record>, StoreError> {
        let rows: Vec<DocumentRow> = sqlx::query_as(
            "SELECT id, data FROM documents WHERE collection = $1 ORDER BY created_at, id",
        )
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Record::try_from).collect()
    }

    async fn insert_one(
        &self,
        collection: Collection,
        data: Document,
    ) -> Result<RecordId, StoreError> {
        let id = RecordId::generate();
        sqlx::query("INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)")
            .bind(collection.as_str())
            .bind(id.as_uuid())
            .bind(Value::Object(data))
            .execute(&self.pool)
            .await?;

        debug!("Inserted {collection} document {id}");
        Ok(id)
    }

    async fn upsert_singleton(
        &self,
        collection: Collection,
        data: Document,
    ) -> Result<RecordId, StoreError> {
        let id = RecordId::singleton();
        // Single statement: concurrent upserts cannot create a second row.
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id)
            DO UPDATE SET data = documents.data || EXCLUDED.data, updated_at = now()
            "#,
        )
        .bind(collection.as_str())
        .bind(id.as_uuid())
        .bind(Value::Object(data))
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> Result<bool, StoreError> {
        let id = RecordId::parse(id)?;
        let result = sqlx::query(
            "UPDATE documents SET data = data || $3, updated_at = now() WHERE collection = $1 AND id = $2",
        )
        .bind(collection.as_str())
        .bind(id.as_uuid())
        .bind(Value::Object(patch))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_one(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let id = RecordId::parse(id)?;
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
