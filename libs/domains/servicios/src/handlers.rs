use axum::{
    Router,
    extract::{OriginalUri, Path, State},
    routing::{get, post},
};
use axum_helpers::{
    ApiError, Envelope, ErrorResponse, ResultExt, ValidatedJson,
    errors::responses::{
        AlreadyExistsResponse, InternalFaultResponse, InvalidPayloadResponse, NotFoundResponse,
    },
};
use utoipa::OpenApi;

use crate::models::{
    Application, CreateService, DeletedService, Service, ServiceFields, ServiceList,
    ServiceUpdate, UpdateService,
};
use crate::repository::ServiceRepository;
use crate::service::ServiceCatalog;

/// OpenAPI documentation for the services endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_services, get_service, create_service, update_service, delete_service),
    components(
        schemas(
            Application,
            Service,
            ServiceFields,
            CreateService,
            UpdateService,
            ServiceUpdate,
            ServiceList,
            DeletedService,
            ErrorResponse
        ),
        responses(
            NotFoundResponse,
            InvalidPayloadResponse,
            AlreadyExistsResponse,
            InternalFaultResponse
        )
    ),
    tags(
        (name = "Servicios", description = "Services inventory (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Routes: `GET /servicios`, `POST /servicio`, `GET|PUT|DELETE /servicio/{code}`
pub fn router<R: ServiceRepository + 'static>(catalog: ServiceCatalog<R>) -> Router {
    Router::new()
        .route("/servicios", get(list_services::<R>))
        .route("/servicio", post(create_service::<R>))
        .route(
            "/servicio/{code}",
            get(get_service::<R>)
                .put(update_service::<R>)
                .delete(delete_service::<R>),
        )
        .with_state(catalog)
}

/// List every service
///
/// Responses are wrapped as `{message, status, ...payload}`.
#[utoipa::path(
    get,
    path = "/servicios",
    tag = "Servicios",
    responses(
        (status = 200, description = "All services, in store order", body = ServiceList),
        (status = 500, response = InternalFaultResponse)
    )
)]
async fn list_services<R: ServiceRepository>(
    State(catalog): State<ServiceCatalog<R>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Envelope<ServiceList>, ApiError> {
    let services = catalog.list().await.at(&uri)?;
    Ok(Envelope::ok(
        "Listing all services successfully",
        ServiceList { services },
    ))
}

/// Get a service by code
#[utoipa::path(
    get,
    path = "/servicio/{code}",
    tag = "Servicios",
    params(("code" = String, Path, description = "Service code")),
    responses(
        (status = 200, description = "Service found", body = Service),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalFaultResponse)
    )
)]
async fn get_service<R: ServiceRepository>(
    State(catalog): State<ServiceCatalog<R>>,
    OriginalUri(uri): OriginalUri,
    Path(code): Path<String>,
) -> Result<Envelope<Service>, ApiError> {
    let service = catalog.get(&code).await.at(&uri)?;
    Ok(Envelope::ok("Service found successfully", service))
}

/// Create a service
#[utoipa::path(
    post,
    path = "/servicio",
    tag = "Servicios",
    request_body = CreateService,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 400, description = "InvalidPayload, or AlreadyExists when the code is taken", body = ErrorResponse),
        (status = 500, response = InternalFaultResponse)
    )
)]
async fn create_service<R: ServiceRepository>(
    State(catalog): State<ServiceCatalog<R>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<CreateService>,
) -> Result<Envelope<Service>, ApiError> {
    let service = catalog.create(input).await.at(&uri)?;
    Ok(Envelope::created("Created services successfully", service))
}

/// Replace application, service_name and price of a service
#[utoipa::path(
    put,
    path = "/servicio/{code}",
    tag = "Servicios",
    params(("code" = String, Path, description = "Service code")),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service updated, with old and new values", body = ServiceUpdate),
        (status = 400, response = InvalidPayloadResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalFaultResponse)
    )
)]
async fn update_service<R: ServiceRepository>(
    State(catalog): State<ServiceCatalog<R>>,
    OriginalUri(uri): OriginalUri,
    Path(code): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateService>,
) -> Result<Envelope<ServiceUpdate>, ApiError> {
    let update = catalog.update(&code, input).await.at(&uri)?;
    Ok(Envelope::ok("service updated successfully", update))
}

/// Delete a service by code
#[utoipa::path(
    delete,
    path = "/servicio/{code}",
    tag = "Servicios",
    params(("code" = String, Path, description = "Service code")),
    responses(
        (status = 200, description = "Service deleted", body = DeletedService),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalFaultResponse)
    )
)]
async fn delete_service<R: ServiceRepository>(
    State(catalog): State<ServiceCatalog<R>>,
    OriginalUri(uri): OriginalUri,
    Path(code): Path<String>,
) -> Result<Envelope<DeletedService>, ApiError> {
    catalog.delete(&code).await.at(&uri)?;
    Ok(Envelope::ok(
        "Service was deleted successfully",
        DeletedService { code },
    ))
}
