//! Postgres-backed document store.
//!
//! One JSONB table holds every collection; the primary key is
//! `(collection, id)`, so uniqueness checks and lookups ride on the index.
//! Row-level locking in Postgres is the only write serialization.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use stockroom_core::{FieldMap, RecordId};

use crate::document::Document;
use crate::document_store::DocumentStore;
use crate::error::StoreError;

const SCHEMA_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    collection  TEXT        NOT NULL,
    id          UUID        NOT NULL,
    body        JSONB       NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL,
    PRIMARY KEY (collection, id)
)
"#;

pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `documents` table if it does not exist yet.
    ///
    /// Called once at startup, before the store is handed to request
    /// handlers.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA_DDL).execute(&self.pool).await?;
        Ok(())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate(db.to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

fn row_to_document(row: &PgRow) -> Result<Document, StoreError> {
    let id: uuid::Uuid = row.try_get("id").map_err(StoreError::from)?;
    let body: Value = row.try_get("body").map_err(StoreError::from)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(StoreError::from)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(StoreError::from)?;

    let Value::Object(fields) = body else {
        return Err(StoreError::Backend("document body is not a JSON object".to_string()));
    };

    Ok(Document {
        id: RecordId::from_uuid(id),
        created_at,
        updated_at,
        fields,
    })
}

#[async_trait::async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn insert(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(collection)
        .bind(doc.id.as_uuid())
        .bind(Value::Object(doc.fields))
        .bind(doc.created_at)
        .bind(doc.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, collection: &str, id: RecordId) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, body, created_at, updated_at
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_document).transpose()
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        // UUIDv7 identifiers sort in creation order.
        let rows = sqlx::query(
            r#"
            SELECT id, body, created_at, updated_at
            FROM documents
            WHERE collection = $1
            ORDER BY id
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_document).collect()
    }

    async fn update(
        &self,
        collection: &str,
        id: RecordId,
        fields: FieldMap,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE documents
            SET body = body || $3, updated_at = $4
            WHERE collection = $1 AND id = $2
            RETURNING id, body, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .bind(Value::Object(fields))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_document).transpose()
    }

    async fn remove(&self, collection: &str, id: RecordId) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = $1 AND id = $2
            RETURNING id, body, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_document).transpose()
    }
}
