//! Backend-agnostic document storage.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use stockroom_core::{FieldMap, RecordId};

use crate::document::Document;
use crate::error::StoreError;

/// Collection-scoped document storage.
///
/// No storage assumptions: works against the in-memory map (dev/test) and
/// Postgres (production). The backend's own synchronization is the only
/// serialization boundary — callers never coordinate between requests.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a new document. Fails with [`StoreError::Duplicate`] if the
    /// identifier is already taken in the collection.
    async fn insert(&self, collection: &str, doc: Document) -> Result<(), StoreError>;

    async fn get(&self, collection: &str, id: RecordId) -> Result<Option<Document>, StoreError>;

    /// Every document in the collection, oldest first.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Merge `fields` into an existing document and bump `updated_at`.
    /// Returns the post-update document, or `None` if the id is absent.
    async fn update(
        &self,
        collection: &str,
        id: RecordId,
        fields: FieldMap,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Document>, StoreError>;

    /// Remove a document, returning it if it was present.
    async fn remove(&self, collection: &str, id: RecordId) -> Result<Option<Document>, StoreError>;
}

#[async_trait::async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn insert(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        (**self).insert(collection, doc).await
    }

    async fn get(&self, collection: &str, id: RecordId) -> Result<Option<Document>, StoreError> {
        (**self).get(collection, id).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        (**self).list(collection).await
    }

    async fn update(
        &self,
        collection: &str,
        id: RecordId,
        fields: FieldMap,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Document>, StoreError> {
        (**self).update(collection, id, fields, updated_at).await
    }

    async fn remove(&self, collection: &str, id: RecordId) -> Result<Option<Document>, StoreError> {
        (**self).remove(collection, id).await
    }
}

/// In-memory store for tests/dev.
///
/// Collections map `RecordId -> Document`; identifiers are UUIDv7, so the
/// `BTreeMap` iterates in creation order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<HashMap<String, BTreeMap<RecordId, Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let docs = map.entry(collection.to_string()).or_default();
        if docs.contains_key(&doc.id) {
            return Err(StoreError::Duplicate(format!("{collection}/{}", doc.id)));
        }
        docs.insert(doc.id, doc);
        Ok(())
    }

    async fn get(&self, collection: &str, id: RecordId) -> Result<Option<Document>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(collection).and_then(|docs| docs.get(&id)).cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn update(
        &self,
        collection: &str,
        id: RecordId,
        fields: FieldMap,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Document>, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let Some(doc) = map.get_mut(collection).and_then(|docs| docs.get_mut(&id)) else {
            return Ok(None);
        };

        for (name, value) in fields {
            doc.fields.insert(name, value);
        }
        doc.updated_at = updated_at;
        Ok(Some(doc.clone()))
    }

    async fn remove(&self, collection: &str, id: RecordId) -> Result<Option<Document>, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.get_mut(collection).and_then(|docs| docs.remove(&id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(fields: FieldMap) -> Document {
        let now = Utc::now();
        Document {
            id: RecordId::new(),
            created_at: now,
            updated_at: now,
            fields,
        }
    }

    fn named(name: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), json!(name));
        fields
    }

    #[tokio::test]
    async fn insert_rejects_reused_identifiers() {
        let store = InMemoryDocumentStore::new();
        let doc = doc(named("first"));

        store.insert("widgets", doc.clone()).await.unwrap();
        let err = store.insert("widgets", doc).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[tokio::test]
    async fn same_identifier_is_independent_across_collections() {
        let store = InMemoryDocumentStore::new();
        let doc = doc(named("shared"));

        store.insert("widgets", doc.clone()).await.unwrap();
        store.insert("gadgets", doc.clone()).await.unwrap();
        assert!(store.get("gadgets", doc.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn list_returns_documents_oldest_first() {
        let store = InMemoryDocumentStore::new();
        for name in ["a", "b", "c"] {
            store.insert("widgets", doc(named(name))).await.unwrap();
        }

        let listed = store.list("widgets").await.unwrap();
        let names: Vec<&str> = listed
            .iter()
            .map(|d| d.fields["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_merges_fields_and_bumps_updated_at() {
        let store = InMemoryDocumentStore::new();
        let mut fields = named("before");
        fields.insert("kept".to_string(), json!("original"));
        let original = doc(fields);
        store.insert("widgets", original.clone()).await.unwrap();

        let later = original.updated_at + chrono::Duration::seconds(5);
        let updated = store
            .update("widgets", original.id, named("after"), later)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.fields["name"], json!("after"));
        assert_eq!(updated.fields["kept"], json!("original"));
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.updated_at, later);
    }

    #[tokio::test]
    async fn update_and_remove_report_absent_documents() {
        let store = InMemoryDocumentStore::new();
        let id = RecordId::new();

        let updated = store
            .update("widgets", id, named("x"), Utc::now())
            .await
            .unwrap();
        assert!(updated.is_none());
        assert!(store.remove("widgets", id).await.unwrap().is_none());
    }
}
