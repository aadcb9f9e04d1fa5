use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Path or query `_id` is not a 24-digit hex object id
    #[error("unable to parse product id '{0}'")]
    InvalidId(String),

    #[error("unable to find the product")]
    NotFound,

    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationErrors),

    /// Update body is not an object, or a field has the wrong type
    #[error("unable to decode the request body: {0}")]
    InvalidPayload(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidId(id) => {
                tracing::warn!(id = %id, "Malformed product id");
                AppError::InternalServerError("unable to parse product id".to_string())
            }
            ProductError::NotFound => {
                AppError::UnprocessableEntity("unable to find the product".to_string())
            }
            ProductError::Validation(errors) => AppError::ValidationError(errors),
            ProductError::InvalidPayload(reason) => {
                tracing::info!(reason = %reason, "Undecodable product update");
                AppError::BadRequest("unable to decode the request body".to_string())
            }
            ProductError::Database(e) => {
                tracing::error!(error = %e, "Product store failure");
                AppError::InternalServerError("unable to access the products".to_string())
            }
        }
    }
}

impl From<mongodb::bson::ser::Error> for ProductError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ProductError::Database(err.into())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ProductError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(ProductError::InvalidId("xyz".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_of(ProductError::NotFound), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            status_of(ProductError::InvalidPayload("expected object".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ProductError::Validation(ValidationErrors::new())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ProductError::Database(DatabaseError::Query("boom".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
