#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use estate_api::config::{ImageBackend, ServerConfig};
use estate_api::router::build_app_router;
use estate_api::state::AppState;
use estate_blob::MemoryBlobStore;
use estate_db::storage::MemStorage;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const BOUNDARY: &str = "estate-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        uploads_dir: PathBuf::from("uploads"),
        image_backend: ImageBackend::Object,
        max_upload_bytes: 1024 * 1024,
        seed_demo_data: false,
        object_storage: None,
    }
}

/// Router plus handles on the stores behind it.
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<MemStorage>,
    pub blobs: Arc<MemoryBlobStore>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router over fresh in-memory stores.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with(config: ServerConfig) -> TestApp {
    let storage = Arc::new(MemStorage::new());
    let blobs = Arc::new(MemoryBlobStore::new());
    let state = AppState {
        storage: storage.clone(),
        blobs: blobs.clone(),
        config: Arc::new(config.clone()),
    };
    TestApp {
        router: build_app_router(state, &config),
        storage,
        blobs,
    }
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request("POST", uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request("PUT", uri, body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request("PATCH", uri, body)).await
}

/// POST raw bytes with an explicit content type.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: Vec<u8>) -> Response {
    let request = Request::post(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// One multipart form part.
pub struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// The `file` part of an upload form.
pub fn file_part(filename: &str, content_type: &str, data: &[u8]) -> Part {
    Part {
        name: "file".to_string(),
        filename: Some(filename.to_string()),
        content_type: Some(content_type.to_string()),
        data: data.to_vec(),
    }
}

pub fn text_part(name: &str, value: &str) -> Part {
    Part {
        name: name.to_string(),
        filename: None,
        content_type: None,
        data: value.as_bytes().to_vec(),
    }
}

pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let disposition = match &part.filename {
            Some(f) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{f}\"\r\n",
                part.name
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
        };
        body.extend_from_slice(disposition.as_bytes());
        if let Some(ct) = &part.content_type {
            body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part]) -> Response {
    post_raw(
        app,
        uri,
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        multipart_body(parts),
    )
    .await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_location(app: Router, slug: &str) -> i64 {
    let response = post_json(
        app,
        "/api/locations",
        serde_json::json!({"slug": slug, "name": format!("Location {slug}")}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn create_property(app: Router, location_id: i64) -> i64 {
    let response = post_json(
        app,
        "/api/properties",
        serde_json::json!({
            "locationId": location_id,
            "title": "Garden Flat",
            "bedrooms": 2,
            "bathrooms": 1.0,
            "rent": 1800,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn create_unit(app: Router, property_id: i64) -> i64 {
    let response = post_json(
        app,
        "/api/property-units",
        serde_json::json!({
            "propertyId": property_id,
            "unitNumber": "1A",
            "bedrooms": 1,
            "bathrooms": 1.0,
            "rent": 1200,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
