//! Products Domain
//!
//! Product catalog over a [`DocumentStore`](database::mongodb::DocumentStore).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, token gates, body limit
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, update overlay, batch insert
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Query    │  ← Filter and update documents
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← DocumentStore<Product> (MongoDB or in-memory)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_products::{handlers, mongodb::product_store, ProductService};
//!
//! let service = ProductService::new(product_store(&db, "products"));
//! let router = handlers::router(service, token_auth);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod query;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Product, ProductDraft, ProductResponse};
pub use mongodb::{MongoProductStore, product_store};
pub use service::ProductService;
