use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use estate_api::error::{not_found, AppError};
use estate_blob::BlobError;
use estate_core::error::CoreError;
use estate_db::storage::StorageError;
use http_body_util::BodyExt;

async fn status_and_body(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, json) = status_and_body(not_found("Property", 42)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Property with id 42 not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let err = AppError::Core(CoreError::Validation("title is required".into()));
    let (status, json) = status_and_body(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "title is required");
}

#[tokio::test]
async fn storage_conflict_maps_to_409() {
    let err = AppError::Storage(StorageError::Conflict("Slug 'x' is taken".into()));
    let (status, json) = status_and_body(err).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn wrapped_core_error_keeps_its_status() {
    let err = AppError::Storage(StorageError::Core(CoreError::Validation("bad".into())));
    let (status, json) = status_and_body(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_blob_maps_to_404() {
    let (status, json) =
        status_and_body(AppError::Blob(BlobError::NotFound("images/x.jpg".into()))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Image 'images/x.jpg' not found");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        status_and_body(AppError::Blob(BlobError::Backend("s3 timeout at 10.0.0.4".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");

    let (status, _) = status_and_body(AppError::Storage(StorageError::Database(
        sqlx::Error::PoolTimedOut,
    )))
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _) = status_and_body(AppError::Storage(StorageError::Database(
        sqlx::Error::RowNotFound,
    )))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn core_errors_convert_into_app_errors() {
    let err: AppError = CoreError::Conflict("dupe".into()).into();
    assert_matches!(err, AppError::Core(CoreError::Conflict(_)));
}
