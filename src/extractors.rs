use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// The `{id}` path segment of `/stock/{id}`. Anything that is not an `i32`
/// is rejected with 400 before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct StockId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for StockId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidId(e.body_text()))?;

        let id = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::InvalidId(raw.clone()))?;

        Ok(StockId(id))
    }
}

/// `Json<T>` whose rejection is an `AppError`, so malformed bodies get the
/// same `{"error": ...}` shape as every other failure.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}
