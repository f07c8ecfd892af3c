//! `GET /` - a static listing of the public routes

use axum::{Router, routing::get};
use axum_helpers::Envelope;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub route: &'static str,
    pub method: &'static str,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_body: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RouteCatalog {
    pub routes: Vec<RouteInfo>,
}

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Envelope<RouteCatalog> {
    Envelope::ok("Services inventory API", catalog())
}

fn route(method: &'static str, route: &'static str, result: &'static str) -> RouteInfo {
    RouteInfo {
        route,
        method,
        result,
        format_body: None,
    }
}

pub fn catalog() -> RouteCatalog {
    RouteCatalog {
        routes: vec![
            route("GET", "/servicios", "Get all services"),
            route("GET", "/servicio/{code}", "Get a service from code"),
            route("DELETE", "/servicio/{code}", "Delete a service from code"),
            RouteInfo {
                format_body: Some(json!({
                    "application": "Hands, Feet or Eyelashes",
                    "service_name": "String, the service offered for that application",
                    "price": "String price",
                })),
                ..route("PUT", "/servicio/{code}", "Update a service from code")
            },
            RouteInfo {
                format_body: Some(json!({
                    "code": "String code, unique",
                    "application": "Hands, Feet or Eyelashes",
                    "service_name": "String, the service offered for that application",
                    "price": "String price",
                })),
                ..route("POST", "/servicio", "Add a service from a JSON body")
            },
            route("GET", "/users", "Get all users"),
            RouteInfo {
                format_body: Some(json!({
                    "username": "String",
                    "email": "String",
                    "password": "String, stored as a salted hash",
                })),
                ..route("POST", "/users", "Register a user from a JSON body")
            },
        ],
    }
}
