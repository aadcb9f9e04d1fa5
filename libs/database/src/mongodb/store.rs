use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::common::DatabaseResult;

/// Result of an `update_one` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// The operations handlers need from a collection of `T`.
///
/// Filters and updates are plain BSON documents: equality filters such as
/// `{ "vendor": "google" }` and update documents using `$set` / `$unset`.
/// Implementations report unique index violations as
/// [`DatabaseError::DuplicateKey`](crate::DatabaseError::DuplicateKey).
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DocumentStore<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    async fn find(&self, filter: Document) -> DatabaseResult<Vec<T>>;

    async fn find_one(&self, filter: Document) -> DatabaseResult<Option<T>>;

    /// Returns the stored `_id`
    async fn insert_one(&self, document: &T) -> DatabaseResult<Bson>;

    async fn update_one(&self, filter: Document, update: Document)
    -> DatabaseResult<UpdateOutcome>;

    /// Returns the number of deleted documents (0 or 1)
    async fn delete_one(&self, filter: Document) -> DatabaseResult<u64>;

    /// Creates a unique ascending index on `field` if it does not exist yet.
    async fn ensure_unique_index(&self, field: &str) -> DatabaseResult<()>;
}

/// [`DocumentStore`] backed by a driver collection
#[derive(Debug)]
pub struct MongoStore<T>
where
    T: Send + Sync,
{
    collection: Collection<T>,
}

impl<T> Clone for MongoStore<T>
where
    T: Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}

impl<T> MongoStore<T>
where
    T: Send + Sync,
{
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }
}

#[async_trait]
impl<T> DocumentStore<T> for MongoStore<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static,
{
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn find(&self, filter: Document) -> DatabaseResult<Vec<T>> {
        let cursor = self.collection.find(filter).await?;
        let documents: Vec<T> = cursor.try_collect().await?;
        Ok(documents)
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn find_one(&self, filter: Document) -> DatabaseResult<Option<T>> {
        Ok(self.collection.find_one(filter).await?)
    }

    #[instrument(skip(self, document), fields(collection = %self.collection.name()))]
    async fn insert_one(&self, document: &T) -> DatabaseResult<Bson> {
        let result = self.collection.insert_one(document).await?;
        Ok(result.inserted_id)
    }

    #[instrument(skip(self, update), fields(collection = %self.collection.name()))]
    async fn update_one(
        &self,
        filter: Document,
        update: Document,
    ) -> DatabaseResult<UpdateOutcome> {
        let result = self.collection.update_one(filter, update).await?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn delete_one(&self, filter: Document) -> DatabaseResult<u64> {
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn ensure_unique_index(&self, field: &str) -> DatabaseResult<()> {
        let mut keys = Document::new();
        keys.insert(field, 1);

        let options = IndexOptions::builder()
            .unique(true)
            .name(format!("idx_{field}_unique"))
            .build();
        let model = IndexModel::builder().keys(keys).options(options).build();

        self.collection.create_index(model).await?;
        tracing::info!(field, "Unique index ensured");
        Ok(())
    }
}
