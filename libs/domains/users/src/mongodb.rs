//! Driver-backed user store

use database::mongodb::{Database, MongoStore};

use crate::models::User;

pub type MongoUserStore = MongoStore<User>;

pub fn user_store(db: &Database, collection_name: &str) -> MongoUserStore {
    MongoStore::new(db, collection_name)
}
