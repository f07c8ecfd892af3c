//! JSON extractor with presence validation using the validator crate.

use crate::errors::ApiError;
use axum::extract::{FromRequest, Json, OriginalUri, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON body extractor that rejects with `InvalidPayload`.
///
/// Both failure modes end up as a 400 error envelope carrying the request path:
/// - the body is not JSON, lacks a field or has a field of the wrong type
/// - the body parses but a `#[validate]` rule fails (empty string, etc.)
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(length(min = 1))]
///     username: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.username)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Nested routers rewrite the URI, the original one is what clients sent
        let path = req
            .extensions()
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.path().to_string())
            .unwrap_or_else(|| req.uri().path().to_string());

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_payload(&path, rejection.body_text()))?;

        data.validate()
            .map_err(|errors| ApiError::invalid_payload(&path, describe(&errors)))?;

        Ok(ValidatedJson(data))
    }
}

/// `missing or empty fields: a, b` with field names sorted.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    format!("missing or empty fields: {}", fields.join(", "))
}
