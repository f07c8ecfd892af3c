//! OpenAPI document for the whole binary

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Servicios API",
        version = "0.1.0",
        description = "Services inventory and user registration over MongoDB"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct Info;

/// Info block plus the path and component sets of each domain
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = Info::openapi();
        doc.merge(domain_servicios::ApiDoc::openapi());
        doc.merge(domain_users::ApiDoc::openapi());
        doc
    }
}
