//! Product Service - business rules over a [`DocumentStore`]

use database::mongodb::DocumentStore;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDraft};
use crate::query::{filter_from_query, id_filter, parse_object_id, update_document};

pub struct ProductService<S: DocumentStore<Product>> {
    store: Arc<S>,
}

impl<S: DocumentStore<Product>> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Products matching every query parameter by equality
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &[(String, String)]) -> ProductResult<Vec<Product>> {
        let filter = filter_from_query(query)?;
        Ok(self.store.find(filter).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let id = parse_object_id(id)?;
        self.store
            .find_one(id_filter(id))
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Validates every draft, then inserts them one by one with fresh ids.
    ///
    /// An insert failure aborts the batch; products inserted before it stay.
    #[instrument(skip(self, drafts), fields(count = drafts.len()))]
    pub async fn create_products(&self, drafts: Vec<ProductDraft>) -> ProductResult<Vec<ObjectId>> {
        for draft in &drafts {
            draft.validate()?;
        }

        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let product = Product::from_draft(ObjectId::new(), draft);
            self.store.insert_one(&product).await?;
            ids.push(product.id);
        }

        tracing::info!(inserted = ids.len(), "Products created");
        Ok(ids)
    }

    /// Overlays the fields of `patch` onto the stored product, validates the
    /// result and persists it with `$set`.
    ///
    /// Fields missing from `patch` keep their stored values.
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: &str, patch: Value) -> ProductResult<Product> {
        let Value::Object(patch) = patch else {
            return Err(ProductError::InvalidPayload(
                "expected a JSON object".to_string(),
            ));
        };

        let existing = self.get_product(id).await?;

        let mut merged = serde_json::to_value(existing.to_draft())
            .map_err(|e| ProductError::InvalidPayload(e.to_string()))?;
        if let Value::Object(fields) = &mut merged {
            fields.extend(patch);
        }

        let draft: ProductDraft = serde_json::from_value(merged)
            .map_err(|e| ProductError::InvalidPayload(e.to_string()))?;
        draft.validate()?;

        let outcome = self
            .store
            .update_one(id_filter(existing.id), update_document(&draft)?)
            .await?;
        if outcome.matched == 0 {
            return Err(ProductError::NotFound);
        }

        tracing::info!(product_id = %existing.id, "Product updated");
        Ok(Product::from_draft(existing.id, draft))
    }

    /// Number of deleted products: 1, or 0 for an unknown id
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<u64> {
        let id = parse_object_id(id)?;
        let deleted = self.store.delete_one(id_filter(id)).await?;

        tracing::info!(product_id = %id, deleted, "Product delete requested");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::DatabaseError;
    use database::mongodb::{MockDocumentStore, UpdateOutcome};
    use mongodb::bson::Bson;
    use serde_json::json;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            product_name: name.to_string(),
            price: 250,
            currency: "INR".to_string(),
            vendor: "google".to_string(),
            ..Default::default()
        }
    }

    fn stored(name: &str) -> Product {
        Product::from_draft(ObjectId::new(), draft(name))
    }

    #[tokio::test]
    async fn test_create_validates_whole_batch_before_inserting() {
        let mut store = MockDocumentStore::<Product>::new();
        store.expect_insert_one().never();

        let service = ProductService::new(store);
        let invalid = ProductDraft {
            price: 5000,
            ..draft("tv")
        };

        let err = service
            .create_products(vec![draft("radio"), invalid])
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_stops_at_first_insert_failure() {
        let mut store = MockDocumentStore::<Product>::new();
        let mut seq = mockall::Sequence::new();
        store
            .expect_insert_one()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|p| Ok(Bson::ObjectId(p.id)));
        store
            .expect_insert_one()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(DatabaseError::Query("disk full".into())));

        let service = ProductService::new(store);
        let err = service
            .create_products(vec![draft("a"), draft("b"), draft("c")])
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }

    #[tokio::test]
    async fn test_create_returns_distinct_ids() {
        let mut store = MockDocumentStore::<Product>::new();
        store
            .expect_insert_one()
            .times(2)
            .returning(|p| Ok(Bson::ObjectId(p.id)));

        let service = ProductService::new(store);
        let ids = service
            .create_products(vec![draft("a"), draft("b")])
            .await
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn test_get_unknown_product_is_not_found() {
        let mut store = MockDocumentStore::<Product>::new();
        store.expect_find_one().returning(|_| Ok(None));

        let service = ProductService::new(store);
        let err = service
            .get_product(&ObjectId::new().to_hex())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound));
    }

    #[tokio::test]
    async fn test_malformed_id_never_reaches_store() {
        let mut store = MockDocumentStore::<Product>::new();
        store.expect_find_one().never();
        store.expect_delete_one().never();

        let service = ProductService::new(store);
        assert!(matches!(
            service.get_product("xyz").await,
            Err(ProductError::InvalidId(_))
        ));
        assert!(matches!(
            service.delete_product("xyz").await,
            Err(ProductError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_update_overlays_patch_on_stored_product() {
        let existing = stored("googletalk");
        let found = existing.clone();

        let mut store = MockDocumentStore::<Product>::new();
        store
            .expect_find_one()
            .returning(move |_| Ok(Some(found.clone())));
        store
            .expect_update_one()
            .withf(|_, update| {
                update
                    .get_document("$set")
                    .and_then(|set| set.get_str("currency"))
                    .is_ok_and(|c| c == "USD")
            })
            .returning(|_, _| {
                Ok(UpdateOutcome {
                    matched: 1,
                    modified: 1,
                })
            });

        let service = ProductService::new(store);
        let updated = service
            .update_product(&existing.id.to_hex(), json!({ "currency": "USD" }))
            .await
            .unwrap();

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.currency, "USD");
        assert_eq!(updated.product_name, "googletalk");
    }

    #[tokio::test]
    async fn test_update_rejects_non_object_body() {
        let store = MockDocumentStore::<Product>::new();
        let service = ProductService::new(store);

        let err = service
            .update_product(&ObjectId::new().to_hex(), json!([1, 2]))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_wrong_field_type() {
        let found = stored("tv");
        let id = found.id.to_hex();

        let mut store = MockDocumentStore::<Product>::new();
        store
            .expect_find_one()
            .returning(move |_| Ok(Some(found.clone())));
        store.expect_update_one().never();

        let service = ProductService::new(store);
        let err = service
            .update_product(&id, json!({ "price": "cheap" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn test_update_validates_merged_record() {
        let found = stored("tv");
        let id = found.id.to_hex();

        let mut store = MockDocumentStore::<Product>::new();
        store
            .expect_find_one()
            .returning(move |_| Ok(Some(found.clone())));
        store.expect_update_one().never();

        let service = ProductService::new(store);
        let err = service
            .update_product(&id, json!({ "currency": "RUPEE" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_of_concurrently_deleted_product_is_not_found() {
        let found = stored("tv");
        let id = found.id.to_hex();

        let mut store = MockDocumentStore::<Product>::new();
        store
            .expect_find_one()
            .returning(move |_| Ok(Some(found.clone())));
        store
            .expect_update_one()
            .returning(|_, _| Ok(UpdateOutcome::default()));

        let service = ProductService::new(store);
        let err = service.update_product(&id, json!({})).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_reports_count() {
        let mut store = MockDocumentStore::<Product>::new();
        store.expect_delete_one().returning(|_| Ok(1));

        let service = ProductService::new(store);
        let deleted = service
            .delete_product(&ObjectId::new().to_hex())
            .await
            .unwrap();
        assert_eq!(deleted, 1);
    }
}
