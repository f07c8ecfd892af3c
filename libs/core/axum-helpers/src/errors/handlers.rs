use axum::extract::OriginalUri;
use axum::http::Method;

use super::{ApiError, ErrorKind};

/// Router fallback: unknown routes get the NotFound envelope.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found(uri.path(), "No route matches this path")
}

/// Known path, unsupported method.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::new(
        ErrorKind::MethodNotAllowed,
        uri.path(),
        format!("{method} is not supported on this path"),
    )
}
