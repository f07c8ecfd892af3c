//! Reusable OpenAPI responses for the error envelope.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "message": "Resource not found /servicio/S9 Service 'S9' not found",
        "status": 404,
        "error": "NotFound"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Missing, empty or mistyped field",
    content_type = "application/json",
    example = json!({
        "message": "Error creating resource in /servicio missing or empty fields: price",
        "status": 400,
        "error": "InvalidPayload"
    })
)]
pub struct InvalidPayloadResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "A record with the same key already exists",
    content_type = "application/json",
    example = json!({
        "message": "Error creating resource in /servicio This service S1 already exists",
        "status": 400,
        "error": "AlreadyExists"
    })
)]
pub struct AlreadyExistsResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "message": "Internal server error /users Database error: connection refused",
        "status": 500,
        "error": "InternalFault"
    })
)]
pub struct InternalFaultResponse(pub ErrorResponse);
