//! Users Domain
//!
//! Registration (`POST /users`) and authentication (`POST /auth`). Both
//! answer with the user's email and a signed token in the `x-auth-token`
//! header; the password, hashed or not, never leaves the service.
//!
//! ```rust,ignore
//! use domain_users::{handlers, mongodb::user_store, PasswordHasher, UserService};
//!
//! let service = UserService::new(user_store(&db, "users"), hasher, token_auth);
//! service.ensure_indexes().await?;
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod password;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{Credentials, User, UserResponse};
pub use mongodb::{MongoUserStore, user_store};
pub use password::{PasswordConfig, PasswordError, PasswordHasher};
pub use service::{Session, UserService};
