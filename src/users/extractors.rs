use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;
use tracing::warn;

/// JSON request body. Decodes regardless of `Content-Type` and rejects
/// anything that does not fit `T` with `400 Invalid input`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, "failed to read request body");
            (StatusCode::BAD_REQUEST, "Invalid input".to_string())
        })?;

        let value = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "invalid json body");
            (StatusCode::BAD_REQUEST, "Invalid input".to_string())
        })?;

        Ok(JsonBody(value))
    }
}

/// The `:id` segment of `/updateUser/:id` and `/deleteUser/:id`.
#[derive(Debug, Clone, Copy)]
pub struct UserIdParam(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                warn!(error = %e, "missing user id segment");
                (StatusCode::BAD_REQUEST, "Invalid URL path".to_string())
            })?;

        let id = raw.parse::<i32>().map_err(|_| {
            warn!(raw = %raw, "user id is not an integer");
            (StatusCode::BAD_REQUEST, "Invalid user ID".to_string())
        })?;

        Ok(UserIdParam(id))
    }
}
