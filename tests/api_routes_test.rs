mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use backoffice_api::api_v1_routes;
use common::TestApp;

fn router(app: &TestApp) -> Router {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .with_state(app.state.clone())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn status_endpoint_responds() {
    let app = TestApp::new().await;
    let response = router(&app).oneshot(get("/api/v1/status")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "backoffice-api");
}

#[tokio::test]
async fn missing_receipt_returns_not_found() {
    let app = TestApp::new().await;
    let response = router(&app)
        .oneshot(get("/api/v1/receipts/NOPE"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn receipt_creation_conflicts_over_http() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-40").await;

    let created = router(&app)
        .oneshot(post_json("/api/v1/receipts/WZ-40", json!({})))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let conflict = router(&app)
        .oneshot(post_json("/api/v1/receipts/WZ-40", json!({})))
        .await
        .unwrap();
    assert_eq!(conflict.status(), StatusCode::CONFLICT);
    let body = body_json(conflict).await;
    assert_eq!(body["message"], "Receipt has been already created");
}

#[tokio::test]
async fn invoice_creation_over_http() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-41").await;
    let worker = app.seed_worker().await;

    let response = router(&app)
        .oneshot(post_json(
            "/api/v1/invoices/WZ-41",
            json!({ "worker_id": worker.id, "supply_days": 3 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["state"], "in_progress");
}

#[tokio::test]
async fn invalid_supply_days_fail_validation() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-42").await;
    let worker = app.seed_worker().await;

    let response = router(&app)
        .oneshot(post_json(
            "/api/v1/invoices/WZ-42",
            json!({ "worker_id": worker.id, "supply_days": 9999 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn product_list_clamps_page_size() {
    let app = TestApp::new().await;
    app.seed_product("widget", dec!(10.00), 23).await;

    let response = router(&app)
        .oneshot(get("/api/v1/products?per_page=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["per_page"], 1);
    assert_eq!(body["pagination"]["total_pages"], 1);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = router(&app)
        .oneshot(get("/api/v1/products?per_page=10000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["per_page"], 100);
}

#[tokio::test]
async fn store_update_over_http() {
    let app = TestApp::new().await;
    let store = app.seed_store("central").await;

    let response = router(&app)
        .oneshot(put_json(
            &format!("/api/v1/stores/{}", store.id),
            json!({
                "name": "central",
                "address": "Nowa 5",
                "postal_code": "80-001",
                "city": "Gdansk",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["city"], "Gdansk");
    assert_eq!(body["stock_id"], store.stock_id);
}

#[tokio::test]
async fn export_endpoint_serves_csv() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-43").await;

    let response = router(&app).oneshot(get("/api/v1/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/csv")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("marketplace,country,invoice_id"));
    assert!(csv.contains("WZ-43"));
}
