use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{merge_top_level, Collection, Document, DocumentStore, Record, RecordId, StoreError};

/// Process-local store. Each collection is an insertion-ordered list of records.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Record>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_one(&self, collection: Collection) -> Result<Option<Record>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .and_then(|records| records.first().cloned()))
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Record>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard.get(&collection).cloned().unwrap_or_default())
    }

    async fn insert_one(
        &self,
        collection: Collection,
        data: Document,
    ) -> Result<RecordId, StoreError> {
        let id = RecordId::generate();
        let mut guard = self.collections.write().await;
        guard
            .entry(collection)
            .or_default()
            .push(Record { id, data });
        Ok(id)
    }

    async fn upsert_singleton(
        &self,
        collection: Collection,
        data: Document,
    ) -> Result<RecordId, StoreError> {
        let mut guard = self.collections.write().await;
        let records = guard.entry(collection).or_default();
        match records.first_mut() {
            Some(existing) => {
                merge_top_level(&mut existing.data, data);
                Ok(existing.id)
            }
            None => {
                let id = RecordId::singleton();
                records.push(Record { id, data });
                Ok(id)
            }
        }
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> Result<bool, StoreError> {
        let id = RecordId::parse(id)?;
        let mut guard = self.collections.write().await;
        let Some(record) = guard
            .get_mut(&collection)
            .and_then(|records| records.iter_mut().find(|r| r.id == id))
        else {
            return Ok(false);
        };
        merge_top_level(&mut record.data, patch);
        Ok(true)
    }

    async fn delete_one(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let id = RecordId::parse(id)?;
        let mut guard = self.collections.write().await;
        let Some(records) = guard.get_mut(&collection) else {
            return Ok(false);
        };
        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_empty_collection_reads_are_empty() {
        let store = InMemoryDocumentStore::new();
        assert!(store.find_one(Collection::Profile).await.unwrap().is_none());
        assert!(store.find_all(Collection::Education).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_then_list_keeps_order() {
        let store = InMemoryDocumentStore::new();
        let a = store
            .insert_one(Collection::Education, doc(json!({"title": "BSc"})))
            .await
            .unwrap();
        let b = store
            .insert_one(Collection::Education, doc(json!({"title": "MSc"})))
            .await
            .unwrap();
        assert_ne!(a, b);

        let all = store.find_all(Collection::Education).await.unwrap();
        let ids: Vec<_> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert!(store.find_all(Collection::Experience).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_singleton_keeps_one_document() {
        let store = InMemoryDocumentStore::new();
        let first = store
            .upsert_singleton(Collection::Profile, doc(json!({"firstName": "Ada"})))
            .await
            .unwrap();
        let second = store
            .upsert_singleton(
                Collection::Profile,
                doc(json!({"firstName": "Ada", "lastName": "Lovelace"})),
            )
            .await
            .unwrap();
        assert_eq!(first, second);

        let all = store.find_all(Collection::Profile).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].data["lastName"], "Lovelace");
    }

    #[tokio::test]
    async fn test_update_fields_merges_and_reports_match() {
        let store = InMemoryDocumentStore::new();
        let id = store
            .insert_one(
                Collection::Others,
                doc(json!({"heading": "", "fields": []})),
            )
            .await
            .unwrap();

        let matched = store
            .update_fields(
                Collection::Others,
                &id.to_string(),
                doc(json!({"heading": "Languages"})),
            )
            .await
            .unwrap();
        assert!(matched);

        let record = store.find_one(Collection::Others).await.unwrap().unwrap();
        assert_eq!(record.data["heading"], "Languages");
        assert_eq!(record.data["fields"], json!([]));

        let missing = store
            .update_fields(
                Collection::Others,
                &RecordId::generate().to_string(),
                doc(json!({"heading": "x"})),
            )
            .await
            .unwrap();
        assert!(!missing);
    }

    #[tokio::test]
    async fn test_delete_one_removes_only_target() {
        let store = InMemoryDocumentStore::new();
        let keep = store
            .insert_one(Collection::Experience, doc(json!({"title": "Engineer"})))
            .await
            .unwrap();
        let gone = store
            .insert_one(Collection::Experience, doc(json!({"title": "Intern"})))
            .await
            .unwrap();

        assert!(store
            .delete_one(Collection::Experience, &gone.to_string())
            .await
            .unwrap());
        assert!(!store
            .delete_one(Collection::Experience, &gone.to_string())
            .await
            .unwrap());

        let all = store.find_all(Collection::Experience).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep);
    }

    #[tokio::test]
    async fn test_malformed_id_is_an_error() {
        let store = InMemoryDocumentStore::new();
        let err = store
            .delete_one(Collection::Education, "not-an-id")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MalformedId(_)));
    }
}
