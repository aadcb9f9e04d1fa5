//! Driver-backed product store

use database::mongodb::{Database, MongoStore};

use crate::models::Product;

pub type MongoProductStore = MongoStore<Product>;

pub fn product_store(db: &Database, collection_name: &str) -> MongoProductStore {
    MongoStore::new(db, collection_name)
}
