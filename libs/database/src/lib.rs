//! Document store access for the electronics services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health checks and the
//!   [`DocumentStore`](mongodb::DocumentStore) gateway backed by the driver
//! - `config` - `core_config::FromEnv` support for [`MongoConfig`](mongodb::MongoConfig)
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, DocumentStore, MongoConfig, MongoStore};
//!
//! let config = MongoConfig::new("localhost", 27017, "electronics");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//!
//! let users: MongoStore<User> = MongoStore::new(&db, "users");
//! users.ensure_unique_index("username").await?;
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
