use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::r#trait::{DocumentStore, Fields, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DocKey {
    collection: String,
    key: String,
}

impl DocKey {
    fn new(collection: &str, key: &str) -> Self {
        Self {
            collection: collection.to_owned(),
            key: key.to_owned(),
        }
    }
}

/// In-memory document store.
///
/// Intended for tests/dev. Enumeration is key-ordered, matching the hosted
/// service.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<DocKey, Fields>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, Fields)>, StoreError> {
        let documents = self.documents.read().map_err(|_| StoreError::Lock)?;

        let mut entries: Vec<(String, Fields)> = documents
            .iter()
            .filter(|(doc_key, _)| doc_key.collection == collection)
            .map(|(doc_key, fields)| (doc_key.key.clone(), fields.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(entries)
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError> {
        let documents = self.documents.read().map_err(|_| StoreError::Lock)?;
        Ok(documents.get(&DocKey::new(collection, key)).cloned())
    }

    async fn set(
        &self,
        collection: &str,
        key: &str,
        fields: Fields,
        merge: bool,
    ) -> Result<(), StoreError> {
        let mut documents = self.documents.write().map_err(|_| StoreError::Lock)?;

        if merge {
            let slot = documents.entry(DocKey::new(collection, key)).or_default();
            for (field, value) in fields {
                slot.insert(field, value);
            }
        } else {
            documents.insert(DocKey::new(collection, key), fields);
        }

        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        let mut documents = self.documents.write().map_err(|_| StoreError::Lock)?;
        documents.remove(&DocKey::new(collection, key));
        Ok(())
    }
}
