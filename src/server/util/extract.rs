//! Request extractors that report every client-input failure as 400 Bad Request.
//!
//! Axum's stock `Json` and `Path` extractors answer with 415/422 for some failures;
//! these wrappers fold all of them into `AppError::BadRequest` with a plain-text body.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::server::{error::AppError, util::parse::parse_feedback_id};

/// JSON request body decoded without regard to the `Content-Type` header.
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let value =
            serde_json::from_slice(&bytes).map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(Self(value))
    }
}

/// Feedback ID bound from the `{id}` path parameter.
pub struct FeedbackId(pub i32);

impl<S> FromRequestParts<S> for FeedbackId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(Self(parse_feedback_id(&raw)?))
    }
}
