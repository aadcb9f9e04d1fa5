//! Request extractors whose rejections are [`AppError`](crate::errors::AppError)s.

pub mod json;
pub mod validated_json;

pub use json::AppJson;
pub use validated_json::ValidatedJson;
