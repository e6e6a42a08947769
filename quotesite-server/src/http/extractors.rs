//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use quotesite_core::{parse_optional_id, ValidationError};

use super::error::ApiError;

/// Extract and validate a numeric id from the path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::NotANumber { field: "id" }.into()))?;

        match parse_optional_id("id", Some(&id))? {
            Some(id) => Ok(Self(id)),
            None => Err(ValidationError::NotANumber { field: "id" }.into()),
        }
    }
}

/// `Json<T>` whose rejections render as [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
