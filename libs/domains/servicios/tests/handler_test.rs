//! Handler tests for the servicios domain
//!
//! The router is driven with `oneshot` over the in-memory repository, so
//! these cover routing, body binding, envelopes and error classification
//! without a database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_servicios::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app_with(repo: InMemoryServiceRepository) -> Router {
    handlers::router(ServiceCatalog::new(repo))
}

fn app() -> Router {
    app_with(InMemoryServiceRepository::new())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn manicure() -> Value {
    json!({
        "code": "S1",
        "application": "Hands",
        "service_name": "Manicure",
        "price": "10"
    })
}

#[tokio::test]
async fn test_create_get_and_duplicate_scenario() {
    let app = app();

    let (status, body) = send(&app, "POST", "/servicio", Some(manicure())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Created services successfully");
    assert_eq!(body["status"], 201);
    assert_eq!(body["code"], "S1");
    assert!(body["_id"].is_string());
    let id = body["_id"].clone();

    let (status, body) = send(&app, "GET", "/servicio/S1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Service found successfully");
    assert_eq!(body["_id"], id);
    assert_eq!(body["code"], "S1");
    assert_eq!(body["application"], "Hands");
    assert_eq!(body["service_name"], "Manicure");
    assert_eq!(body["price"], "10");

    let (status, body) = send(&app, "POST", "/servicio", Some(manicure())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "AlreadyExists");
    assert_eq!(body["status"], 400);
    assert_eq!(
        body["message"],
        "Error creating resource in /servicio This service S1 already exists"
    );
}

#[tokio::test]
async fn test_duplicate_create_leaves_existing_record_unchanged() {
    let app = app();
    send(&app, "POST", "/servicio", Some(manicure())).await;

    let mut other = manicure();
    other["service_name"] = json!("Gel polish");
    other["price"] = json!("30");
    let (status, _) = send(&app, "POST", "/servicio", Some(other)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", "/servicio/S1", None).await;
    assert_eq!(body["service_name"], "Manicure");
    assert_eq!(body["price"], "10");
}

#[tokio::test]
async fn test_list_empty_collection() {
    let (status, body) = send(&app(), "GET", "/servicios", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Listing all services successfully");
    assert_eq!(body["status"], 200);
    assert_eq!(body["services"], json!([]));
}

#[tokio::test]
async fn test_list_returns_every_service_in_insertion_order() {
    let app = app();
    for (code, application) in [("S2", "Feet"), ("S1", "Hands"), ("S3", "Eyelashes")] {
        let body = json!({
            "code": code,
            "application": application,
            "service_name": "x",
            "price": "5"
        });
        send(&app, "POST", "/servicio", Some(body)).await;
    }

    let (_, body) = send(&app, "GET", "/servicios", None).await;
    let codes: Vec<&str> = body["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["S2", "S1", "S3"]);
}

#[tokio::test]
async fn test_get_unknown_is_not_found() {
    let (status, body) = send(&app(), "GET", "/servicio/S9", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
    assert_eq!(body["status"], 404);
    assert_eq!(
        body["message"],
        "Resource not found /servicio/S9 Service 'S9' not found"
    );
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = app();
    send(&app, "POST", "/servicio", Some(manicure())).await;

    let (status, body) = send(&app, "DELETE", "/servicio/S1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Service was deleted successfully",
            "status": 200,
            "code": "S1"
        })
    );

    let (status, _) = send(&app, "GET", "/servicio/S1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/servicio/S1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_update_reports_old_and_new_values() {
    let app = app();
    send(&app, "POST", "/servicio", Some(manicure())).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/servicio/S1",
        Some(json!({
            "application": "Feet",
            "service_name": "Pedicure",
            "price": "15"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "service updated successfully");
    assert_eq!(body["code"], "S1");
    assert_eq!(
        body["service_old"],
        json!({"application": "Hands", "service_name": "Manicure", "price": "10"})
    );
    assert_eq!(
        body["service_new"],
        json!({"application": "Feet", "service_name": "Pedicure", "price": "15"})
    );

    let (_, body) = send(&app, "GET", "/servicio/S1", None).await;
    assert_eq!(body["application"], "Feet");
    assert_eq!(body["service_name"], "Pedicure");
    assert_eq!(body["price"], "15");
}

#[tokio::test]
async fn test_update_unknown_is_not_found() {
    let (status, body) = send(
        &app(),
        "PUT",
        "/servicio/S9",
        Some(json!({
            "application": "Feet",
            "service_name": "Pedicure",
            "price": "15"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_update_requires_all_three_fields() {
    let app = app();
    send(&app, "POST", "/servicio", Some(manicure())).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/servicio/S1",
        Some(json!({ "application": "Feet", "service_name": "Pedicure" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidPayload");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Error creating resource in /servicio/S1"));

    let (_, body) = send(&app, "GET", "/servicio/S1", None).await;
    assert_eq!(body["service_name"], "Manicure");
}

#[tokio::test]
async fn test_create_rejects_missing_empty_and_mistyped_fields() {
    let app = app();

    let cases = [
        json!({ "code": "S1", "application": "Hands", "service_name": "Manicure" }),
        json!({ "code": "", "application": "Hands", "service_name": "Manicure", "price": "10" }),
        json!({ "code": "S1", "application": "Hands", "service_name": "Manicure", "price": 10 }),
        json!({ "code": "S1", "application": "Manos", "service_name": "Manicure", "price": "10" }),
    ];

    for case in cases {
        let (status, body) = send(&app, "POST", "/servicio", Some(case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {case}");
        assert_eq!(body["error"], "InvalidPayload", "payload {case}");
    }

    let (_, body) = send(&app, "GET", "/servicios", None).await;
    assert_eq!(body["services"], json!([]));
}

#[tokio::test]
async fn test_fields_are_bound_by_name_not_position() {
    let app = app();
    let shuffled = json!({
        "price": "10",
        "service_name": "Manicure",
        "application": "Hands",
        "code": "S1"
    });

    let (status, body) = send(&app, "POST", "/servicio", Some(shuffled)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["service_name"], "Manicure");
    assert_eq!(body["price"], "10");
}

#[tokio::test]
async fn test_whitespace_code_round_trips() {
    let app = app();
    let spaced = json!({
        "code": " ",
        "application": "Feet",
        "service_name": "Pedicure",
        "price": "18"
    });

    let (status, _) = send(&app, "POST", "/servicio", Some(spaced)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/servicio/%20", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], " ");
    assert_eq!(body["service_name"], "Pedicure");

    let (status, body) = send(&app, "DELETE", "/servicio/%20", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], " ");

    let (_, body) = send(&app, "GET", "/servicios", None).await;
    assert_eq!(body["services"], json!([]));
}
