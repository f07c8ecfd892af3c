//! Success response body shared by every route.
//!
//! ```json
//! { "message": "Service found successfully", "status": 200, "code": "S1", ... }
//! ```
//!
//! The payload is flattened next to `message` and `status`, so a payload
//! struct with a `services` field yields `{message, status, services}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub status: u16,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, payload: T) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            payload,
        }
    }

    /// 200 OK
    pub fn ok(message: impl Into<String>, payload: T) -> Self {
        Self::new(StatusCode::OK, message, payload)
    }

    /// 201 Created
    pub fn created(message: impl Into<String>, payload: T) -> Self {
        Self::new(StatusCode::CREATED, message, payload)
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Deleted {
        code: &'static str,
    }

    #[test]
    fn payload_fields_sit_beside_message_and_status() {
        let envelope = Envelope::ok("Service was deleted successfully", Deleted { code: "S1" });
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "message": "Service was deleted successfully",
                "status": 200,
                "code": "S1",
            })
        );
    }

    #[test]
    fn created_uses_201() {
        let envelope = Envelope::created("Created user", json!({}));
        assert_eq!(envelope.status, 201);
        assert_eq!(envelope.status_code(), StatusCode::CREATED);
        assert_eq!(envelope.into_response().status(), StatusCode::CREATED);
    }

    #[test]
    fn map_payload_is_flattened() {
        let envelope = Envelope::ok("Listing all users successfully", json!({ "users": [] }));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["users"], json!([]));
        assert_eq!(value["status"], 200);
    }
}
