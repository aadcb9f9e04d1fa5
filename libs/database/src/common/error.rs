/// Server error code MongoDB reports for unique index violations.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Error type for document store operations
///
/// Backends classify their native failures into these variants so callers can
/// react to a duplicate key without knowing which driver produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseError {
    /// A unique index rejected the write
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A document could not be converted to or from its stored form
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The store could not be reached
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other failure reported by the store
    #[error("Database error: {0}")]
    Query(String),
}

impl DatabaseError {
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, DatabaseError::DuplicateKey(_))
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(feature = "mongodb")]
mod mongo_conversions {
    use super::{DUPLICATE_KEY_CODE, DatabaseError};
    use mongodb::bson;
    use mongodb::error::{Error, ErrorKind, WriteFailure};

    impl From<Error> for DatabaseError {
        fn from(err: Error) -> Self {
            match err.kind.as_ref() {
                ErrorKind::Write(WriteFailure::WriteError(write_error))
                    if write_error.code == DUPLICATE_KEY_CODE =>
                {
                    DatabaseError::DuplicateKey(write_error.message.clone())
                }
                ErrorKind::BsonSerialization(e) => DatabaseError::Serialization(e.to_string()),
                ErrorKind::BsonDeserialization(e) => DatabaseError::Serialization(e.to_string()),
                ErrorKind::ServerSelection { message, .. } => {
                    DatabaseError::ConnectionFailed(message.clone())
                }
                _ => DatabaseError::Query(err.to_string()),
            }
        }
    }

    impl From<bson::ser::Error> for DatabaseError {
        fn from(err: bson::ser::Error) -> Self {
            DatabaseError::Serialization(err.to_string())
        }
    }

    impl From<bson::de::Error> for DatabaseError {
        fn from(err: bson::de::Error) -> Self {
            DatabaseError::Serialization(err.to_string())
        }
    }
}
