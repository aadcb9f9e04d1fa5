//! JSON extractor with validation through the validator crate.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::AppJson;
use crate::errors::AppError;

/// [`AppJson`] followed by [`Validate::validate`].
///
/// Extraction failures keep the [`AppJson`] statuses; a validation failure is
/// answered with 400 and the field errors in `details`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Credentials {
///     #[validate(email)]
///     username: String,
///     #[validate(length(min = 8, max = 300))]
///     password: String,
/// }
///
/// async fn register(ValidatedJson(credentials): ValidatedJson<Credentials>) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(data) = AppJson::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
