//! Image byte serving and the reference resolver endpoint.

use axum::extract::{Path, Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use estate_core::content_type::content_type_for_extension;
use estate_core::image_ref::{extract_filename, resolve_image_ref, ImageSource};
use serde::Serialize;

use crate::error::AppError;
use crate::query::ResolveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Stored images are immutable: new uploads always get a fresh key.
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

fn image_response(bytes: impl Into<axum::body::Body>, content_type: &str) -> Response {
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, content_type.to_string()),
            (CACHE_CONTROL, IMAGE_CACHE_CONTROL.to_string()),
        ],
        bytes.into(),
    )
        .into_response()
}

fn missing(key: &str) -> Response {
    AppError::NotFoundMessage(format!("Image '{key}' not found")).into_response()
}

/// Serve bytes from the `image_storage` table, or 404.
pub(crate) async fn database_image_response(state: &AppState, key: &str) -> Response {
    match state.storage.get_image_data(key).await {
        Ok(Some(image)) => image_response(image.data, &image.mime_type),
        Ok(None) => missing(key),
        Err(err) => {
            tracing::debug!(object_key = key, error = %err, "Database image lookup failed");
            missing(key)
        }
    }
}

/// GET /api/images/{*key}
///
/// Every blob-store failure is reported as 404.
pub async fn serve_object(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    match state.blobs.get(&key).await {
        Ok(object) => {
            let content_type = object
                .content_type
                .unwrap_or_else(|| content_type_for_extension(&key).to_string());
            image_response(object.bytes, &content_type)
        }
        Err(err) => {
            tracing::debug!(object_key = %key, error = %err, "Object fetch failed");
            missing(&key)
        }
    }
}

/// GET /api/db-images/{key}
pub async fn serve_db_image(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    database_image_response(&state, &key).await
}

#[derive(Debug, Serialize)]
pub struct ResolvedReference {
    pub url: String,
    pub source: ImageSource,
    pub filename: String,
}

/// GET /api/images/resolve?ref=&type=
pub async fn resolve(Query(params): Query<ResolveParams>) -> Json<DataResponse<ResolvedReference>> {
    let resolved = resolve_image_ref(params.reference.as_deref(), params.parent());
    let filename = extract_filename(&resolved.url);
    Json(DataResponse {
        data: ResolvedReference {
            url: resolved.url,
            source: resolved.source,
            filename,
        },
    })
}
