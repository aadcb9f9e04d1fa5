//! Shared test utilities for domain testing
//!
//! - `InMemoryStore`: `DocumentStore` fake with equality filters, `$set`/`$unset`
//!   and unique indexes (always available)
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: deterministic test data
//!
//! # Usage
//!
//! ## Handler tests
//!
//! ```rust,ignore
//! use test_utils::InMemoryStore;
//!
//! let store = InMemoryStore::<Product>::new();
//! let router = handlers::router(ProductService::new(store.clone()), auth);
//! ```
//!
//! ## MongoDB Testing
//!
//! ```rust,ignore
//! use test_utils::{TestMongo, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires docker"]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let email = builder.email("owner");
//! }
//! ```

use mongodb::bson::oid::ObjectId;

mod memory;

#[cfg(feature = "mongo")]
mod mongo;

pub use memory::InMemoryStore;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving values from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_register_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic document id
    pub fn object_id(&self) -> ObjectId {
        let seed = self.seed.to_be_bytes();
        let mut bytes = [0u8; 12];
        bytes[..8].copy_from_slice(&seed);
        bytes[8..].copy_from_slice(&seed[..4]);
        ObjectId::from_bytes(bytes)
    }

    /// Unique email address, e.g. `owner.12345@test.example`
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@test.example", local, self.seed)
    }

    /// Unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("vendor", "main");
    /// // Returns: "test-vendor-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}
