//! MongoDB connector, health checks and the driver-backed [`DocumentStore`].

mod config;
mod connector;
mod health;
mod store;

pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use store::{DocumentStore, MongoStore, UpdateOutcome};
#[cfg(any(test, feature = "mock"))]
pub use store::MockDocumentStore;

pub use mongodb::{Client, Collection, Database};
