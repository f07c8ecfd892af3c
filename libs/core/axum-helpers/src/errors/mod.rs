pub mod handlers;
pub mod responses;

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// The failure families an API client can observe.
///
/// `MethodNotAllowed` is produced only by the router, never by a domain.
/// Serialized under `error` in the error envelope as the variant name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, strum::Display, strum::AsRefStr,
)]
pub enum ErrorKind {
    NotFound,
    MethodNotAllowed,
    InvalidPayload,
    AlreadyExists,
    InternalFault,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            // AlreadyExists stays 400 for client compatibility
            ErrorKind::InvalidPayload | ErrorKind::AlreadyExists => StatusCode::BAD_REQUEST,
            ErrorKind::InternalFault => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Leading words of the error message.
    pub fn prefix(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Resource not found",
            ErrorKind::MethodNotAllowed => "Method not allowed",
            ErrorKind::InvalidPayload | ErrorKind::AlreadyExists => "Error creating resource in",
            ErrorKind::InternalFault => "Internal server error",
        }
    }
}

/// Error envelope.
///
/// ```json
/// {
///   "message": "Resource not found /servicio/S9 Service 'S9' not found",
///   "status": 404,
///   "error": "NotFound"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// `{prefix} {request path} {detail}`
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
    pub error: ErrorKind,
}

/// An error bound to the request that produced it.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    path: String,
    detail: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, path, detail)
    }

    pub fn invalid_payload(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPayload, path, detail)
    }

    pub fn already_exists(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, path, detail)
    }

    pub fn internal(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalFault, path, detail)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn message(&self) -> String {
        if self.detail.is_empty() {
            format!("{} {}", self.kind.prefix(), self.path)
        } else {
            format!("{} {} {}", self.kind.prefix(), self.path, self.detail)
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status();
        let message = self.message();

        match self.kind {
            ErrorKind::NotFound | ErrorKind::MethodNotAllowed => {
                tracing::info!(kind = %self.kind, path = %self.path, "{}", self.detail)
            }
            ErrorKind::InvalidPayload | ErrorKind::AlreadyExists => {
                tracing::warn!(kind = %self.kind, path = %self.path, "{}", self.detail)
            }
            ErrorKind::InternalFault => {
                tracing::error!(kind = %self.kind, path = %self.path, "{}", self.detail)
            }
        }

        let body = Json(ErrorResponse {
            message,
            status: status.as_u16(),
            error: self.kind,
        });

        (status, body).into_response()
    }
}

/// Domain errors implement this to say which family they belong to.
///
/// The `Display` output becomes the detail part of the message.
pub trait Classify: fmt::Display {
    fn kind(&self) -> ErrorKind;
}

/// Attaches the request path to a classified domain error.
///
/// ```ignore
/// let service = catalog.get(&code).await.at(&uri)?;
/// ```
pub trait ResultExt<T> {
    fn at(self, uri: &Uri) -> Result<T, ApiError>;
}

impl<T, E: Classify> ResultExt<T> for Result<T, E> {
    fn at(self, uri: &Uri) -> Result<T, ApiError> {
        self.map_err(|err| ApiError::new(err.kind(), uri.path(), err.to_string()))
    }
}
