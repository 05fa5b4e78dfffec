//! Responses for requests that match no route handler.

use axum::http::{Method, Uri};

use crate::server::error::AppError;

const FEEDBACK_PREFIX: &str = "/feedback/";
const DELETE_PREFIX: &str = "/feedback/delete/";

/// Answers requests for a known path with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Answers requests whose path matches no route.
///
/// Paths beneath `/feedback/` keep the shape checks of the update and delete
/// endpoints: the wrong method is reported first, then an empty id, then the
/// malformed path.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    let path = uri.path();

    if let Some(rest) = path.strip_prefix(DELETE_PREFIX) {
        return malformed_path(method, Method::DELETE, rest);
    }

    if let Some(rest) = path.strip_prefix(FEEDBACK_PREFIX) {
        return malformed_path(method, Method::PUT, rest);
    }

    AppError::NotFound("Not found".to_string())
}

/// `rest` is the path after the endpoint prefix, where the id belongs.
fn malformed_path(method: Method, expected: Method, rest: &str) -> AppError {
    if method != expected {
        return AppError::MethodNotAllowed;
    }

    if rest.is_empty() {
        return AppError::BadRequest("Invalid ID".to_string());
    }

    AppError::BadRequest("Invalid URL".to_string())
}
