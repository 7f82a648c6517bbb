//! Per-resource persistence gateway.

use std::marker::PhantomData;

use chrono::Utc;
use serde_json::Value;

use stockroom_core::{FieldMap, FieldType, RecordId, Resource};

use crate::document::Document;
use crate::document_store::DocumentStore;
use crate::error::StoreError;

/// Create/find/update/delete for one resource's collection.
///
/// All gateways are this one type, parameterized by the [`Resource`]
/// descriptor; there is no per-resource persistence code.
pub struct Gateway<R, S> {
    store: S,
    _resource: PhantomData<R>,
}

impl<R, S> Gateway<R, S>
where
    R: Resource,
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }

    /// Assign a fresh identity and store timestamps, then persist.
    ///
    /// Date-time fields the payload left out are filled with the creation
    /// timestamp (store-assigned defaults).
    pub async fn create(&self, mut fields: FieldMap) -> Result<Document, StoreError> {
        let now = Utc::now();
        for rule in R::schema().fields() {
            if matches!(rule.ty, FieldType::Timestamp) && !fields.contains_key(rule.name) {
                fields.insert(rule.name.to_string(), Value::String(now.to_rfc3339()));
            }
        }

        let doc = Document {
            id: RecordId::new(),
            created_at: now,
            updated_at: now,
            fields,
        };
        self.store.insert(R::COLLECTION, doc.clone()).await?;

        tracing::debug!(collection = R::COLLECTION, id = %doc.id, "created document");
        Ok(doc)
    }

    /// The full ordered set of stored records, oldest first.
    pub async fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        self.store.list(R::COLLECTION).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Document>, StoreError> {
        // Malformed identifiers read as absent, not as a distinct error.
        let Ok(id) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        self.store.get(R::COLLECTION, id).await
    }

    /// Replace the declared fields present in `fields`; everything else on
    /// the stored record is left as-is.
    pub async fn update_by_id(
        &self,
        id: &str,
        fields: FieldMap,
    ) -> Result<Option<Document>, StoreError> {
        let Ok(id) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        self.store.update(R::COLLECTION, id, fields, Utc::now()).await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<Option<Document>, StoreError> {
        let Ok(id) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        self.store.remove(R::COLLECTION, id).await
    }
}
