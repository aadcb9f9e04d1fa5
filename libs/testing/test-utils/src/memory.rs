//! In-memory [`DocumentStore`] for handler and service tests.

use async_trait::async_trait;
use database::mongodb::{DocumentStore, UpdateOutcome};
use database::{DatabaseError, DatabaseResult};
use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Collection {
    documents: Vec<Document>,
    unique_fields: Vec<String>,
}

impl Collection {
    fn position(&self, filter: &Document) -> Option<usize> {
        self.documents.iter().position(|d| matches(d, filter))
    }

    /// First field of `candidate` that collides with a document other than `skip`
    fn duplicate_of(&self, candidate: &Document, skip: Option<usize>) -> Option<String> {
        let fields = std::iter::once("_id").chain(self.unique_fields.iter().map(String::as_str));

        for field in fields {
            let Some(value) = candidate.get(field) else {
                continue;
            };
            let taken = self
                .documents
                .iter()
                .enumerate()
                .any(|(i, d)| Some(i) != skip && d.get(field) == Some(value));
            if taken {
                return Some(format!("{field}: {value}"));
            }
        }
        None
    }
}

/// Documents are kept as BSON so filters and updates behave like the driver
/// for equality matches, `$set` and `$unset`.
///
/// Clones share the same underlying collection.
pub struct InMemoryStore<T> {
    inner: Arc<Mutex<Collection>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Collection::default())),
            _marker: PhantomData,
        }
    }
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored documents, in insertion order
    pub async fn documents(&self) -> Vec<Document> {
        self.inner.lock().await.documents.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn apply_update(document: &mut Document, update: &Document) -> DatabaseResult<()> {
    for (operator, fields) in update {
        let Bson::Document(fields) = fields else {
            return Err(DatabaseError::Query(format!(
                "update operator {operator} expects a document"
            )));
        };
        match operator.as_str() {
            "$set" => {
                for (key, value) in fields {
                    document.insert(key.clone(), value.clone());
                }
            }
            "$unset" => {
                for key in fields.keys() {
                    document.remove(key);
                }
            }
            other => {
                return Err(DatabaseError::Query(format!(
                    "unsupported update operator {other}"
                )));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl<T> DocumentStore<T> for InMemoryStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn find(&self, filter: Document) -> DatabaseResult<Vec<T>> {
        let collection = self.inner.lock().await;
        collection
            .documents
            .iter()
            .filter(|d| matches(d, &filter))
            .map(|d| bson::from_document(d.clone()).map_err(DatabaseError::from))
            .collect()
    }

    async fn find_one(&self, filter: Document) -> DatabaseResult<Option<T>> {
        let collection = self.inner.lock().await;
        collection
            .position(&filter)
            .map(|i| bson::from_document(collection.documents[i].clone()))
            .transpose()
            .map_err(DatabaseError::from)
    }

    async fn insert_one(&self, document: &T) -> DatabaseResult<Bson> {
        let mut stored = bson::to_document(document)?;
        if !stored.contains_key("_id") {
            stored.insert("_id", ObjectId::new());
        }

        let mut collection = self.inner.lock().await;
        if let Some(duplicate) = collection.duplicate_of(&stored, None) {
            return Err(DatabaseError::DuplicateKey(duplicate));
        }

        let id = stored.get("_id").cloned().unwrap_or(Bson::Null);
        collection.documents.push(stored);
        Ok(id)
    }

    async fn update_one(
        &self,
        filter: Document,
        update: Document,
    ) -> DatabaseResult<UpdateOutcome> {
        let mut collection = self.inner.lock().await;
        let Some(index) = collection.position(&filter) else {
            return Ok(UpdateOutcome::default());
        };

        let mut updated = collection.documents[index].clone();
        apply_update(&mut updated, &update)?;
        if let Some(duplicate) = collection.duplicate_of(&updated, Some(index)) {
            return Err(DatabaseError::DuplicateKey(duplicate));
        }

        let modified = u64::from(collection.documents[index] != updated);
        collection.documents[index] = updated;
        Ok(UpdateOutcome {
            matched: 1,
            modified,
        })
    }

    async fn delete_one(&self, filter: Document) -> DatabaseResult<u64> {
        let mut collection = self.inner.lock().await;
        match collection.position(&filter) {
            Some(index) => {
                collection.documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ensure_unique_index(&self, field: &str) -> DatabaseResult<()> {
        let mut collection = self.inner.lock().await;
        if collection.unique_fields.iter().any(|f| f == field) {
            return Ok(());
        }

        let mut seen = Vec::new();
        for value in collection.documents.iter().filter_map(|d| d.get(field)) {
            if seen.contains(&value) {
                return Err(DatabaseError::DuplicateKey(format!("{field}: {value}")));
            }
            seen.push(value);
        }

        collection.unique_fields.push(field.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Gadget {
        #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
        id: Option<ObjectId>,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        colour: Option<String>,
    }

    fn gadget(name: &str) -> Gadget {
        Gadget {
            id: None,
            name: name.to_string(),
            colour: Some("black".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_missing_id() {
        let store = InMemoryStore::<Gadget>::new();
        let id = store.insert_one(&gadget("radio")).await.unwrap();

        let found = store.find_one(doc! { "_id": id.clone() }).await.unwrap().unwrap();
        assert_eq!(Bson::ObjectId(found.id.unwrap()), id);
    }

    #[tokio::test]
    async fn test_equality_filter() {
        let store = InMemoryStore::<Gadget>::new();
        store.insert_one(&gadget("radio")).await.unwrap();
        store.insert_one(&gadget("tv")).await.unwrap();

        let found = store.find(doc! { "name": "tv" }).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(store.find(doc! {}).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicates() {
        let store = InMemoryStore::<Gadget>::new();
        store.ensure_unique_index("name").await.unwrap();
        store.insert_one(&gadget("radio")).await.unwrap();

        let err = store.insert_one(&gadget("radio")).await.unwrap_err();
        assert!(err.is_duplicate_key());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_set_and_unset() {
        let store = InMemoryStore::<Gadget>::new();
        store.insert_one(&gadget("radio")).await.unwrap();

        let outcome = store
            .update_one(
                doc! { "name": "radio" },
                doc! { "$set": { "name": "tuner" }, "$unset": { "colour": "" } },
            )
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome { matched: 1, modified: 1 });

        let found = store.find_one(doc! { "name": "tuner" }).await.unwrap().unwrap();
        assert_eq!(found.colour, None);
    }

    #[tokio::test]
    async fn test_update_and_delete_without_match() {
        let store = InMemoryStore::<Gadget>::new();

        let outcome = store
            .update_one(doc! { "name": "ghost" }, doc! { "$set": { "name": "x" } })
            .await
            .unwrap();
        assert_eq!(outcome.matched, 0);
        assert_eq!(store.delete_one(doc! { "name": "ghost" }).await.unwrap(), 0);
    }
}
