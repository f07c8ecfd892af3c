use axum::{
    Router,
    extract::{OriginalUri, State},
    routing::get,
};
use axum_helpers::{
    ApiError, Envelope, ErrorResponse, ResultExt, ValidatedJson,
    errors::responses::{InternalFaultResponse, InvalidPayloadResponse},
};
use utoipa::OpenApi;

use crate::models::{CreateUser, User, UserList};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the users endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user),
    components(
        schemas(User, CreateUser, UserList, ErrorResponse),
        responses(InvalidPayloadResponse, InternalFaultResponse)
    ),
    tags(
        (name = "Users", description = "User registration")
    )
)]
pub struct ApiDoc;

/// Routes: `GET /users`, `POST /users`
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/users", get(list_users::<R>).post(create_user::<R>))
        .with_state(service)
}

/// List registered users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, in store order", body = UserList),
        (status = 500, response = InternalFaultResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<UserService<R>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Envelope<UserList>, ApiError> {
    let users = service.list().await.at(&uri)?;
    Ok(Envelope::ok(
        "Listing all users successfully",
        UserList { users },
    ))
}

/// Register a user
///
/// The password is stored as a salted Argon2 hash and never echoed back.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, response = InvalidPayloadResponse),
        (status = 500, response = InternalFaultResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<UserService<R>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> Result<Envelope<User>, ApiError> {
    let user = service.create(input).await.at(&uri)?;
    Ok(Envelope::created("Created user", user))
}
