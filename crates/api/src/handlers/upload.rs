//! Multipart image uploads.
//!
//! The configured [`ImageBackend`] picks the destination: the blob store
//! (`images/...` keys) or the `image_storage` table (prefixed keys).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use estate_core::content_type::extension_for_mime;
use estate_core::image_ref::{
    resolve_image_ref, ImageSource, DB_IMAGE_KEY_PREFIX, PROPERTY_IMAGE_KEY_PREFIX,
    UNIT_IMAGE_KEY_PREFIX,
};
use estate_core::types::{DbId, ImageParent};
use estate_db::models::image::{CreateImage, PropertyImage, UnitImage, MAX_DISPLAY_ORDER};
use estate_db::models::image_storage::NewImageData;
use estate_db::storage::StorageResult;
use serde::Serialize;
use uuid::Uuid;

use crate::config::ImageBackend;
use crate::error::{AppError, AppResult};
use crate::extract::PathParam;
use crate::handlers::image::purge_stored_bytes;
use crate::handlers::property::require_property;
use crate::handlers::property_unit::require_unit;
use crate::response::DataResponse;
use crate::state::AppState;

/// Where an upload belongs. Decides the key namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    Property(DbId),
    Unit(DbId),
    Standalone,
}

impl UploadTarget {
    fn parent(self) -> Option<ImageParent> {
        match self {
            Self::Property(_) => Some(ImageParent::Property),
            Self::Unit(_) => Some(ImageParent::Unit),
            Self::Standalone => None,
        }
    }

    /// Build a fresh key for `backend`.
    pub fn key(self, backend: ImageBackend, id: Uuid, ext: &str) -> String {
        match (backend, self) {
            (ImageBackend::Object, Self::Property(pid)) => {
                format!("images/properties/{pid}/{id}.{ext}")
            }
            (ImageBackend::Object, Self::Unit(uid)) => format!("images/units/{uid}/{id}.{ext}"),
            (ImageBackend::Object, Self::Standalone) => format!("images/uploads/{id}.{ext}"),
            (ImageBackend::Database, Self::Property(_)) => {
                format!("{PROPERTY_IMAGE_KEY_PREFIX}{id}.{ext}")
            }
            (ImageBackend::Database, Self::Unit(_)) => format!("{UNIT_IMAGE_KEY_PREFIX}{id}.{ext}"),
            (ImageBackend::Database, Self::Standalone) => {
                format!("{DB_IMAGE_KEY_PREFIX}{id}.{ext}")
            }
        }
    }
}

/// Parsed multipart form.
#[derive(Debug)]
struct UploadForm {
    data: Bytes,
    mime_type: String,
    caption: Option<String>,
    display_order: Option<i32>,
    is_featured: Option<bool>,
}

async fn read_form(mut multipart: Multipart, max_bytes: usize) -> AppResult<UploadForm> {
    let mut file: Option<(Bytes, String)> = None;
    let mut caption = None;
    let mut display_order = None;
    let mut is_featured = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let mime = field
                    .content_type()
                    .unwrap_or_default()
                    .to_ascii_lowercase();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((data, mime));
            }
            "caption" => caption = Some(text(field).await?),
            "displayOrder" => {
                let raw = text(field).await?;
                let order = raw.trim().parse::<i32>().map_err(|_| {
                    AppError::BadRequest(format!("displayOrder must be an integer, got '{raw}'"))
                })?;
                if !(0..=MAX_DISPLAY_ORDER).contains(&order) {
                    return Err(AppError::BadRequest(format!(
                        "displayOrder must be between 0 and {MAX_DISPLAY_ORDER}"
                    )));
                }
                display_order = Some(order);
            }
            "isFeatured" => {
                let raw = text(field).await?;
                is_featured = Some(matches!(raw.trim(), "true" | "1" | "on"));
            }
            _ => {}
        }
    }

    let (data, mime_type) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' field".to_string()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }
    if data.len() > max_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {max_bytes} byte upload limit"
        )));
    }

    Ok(UploadForm {
        data,
        mime_type,
        caption,
        display_order,
        is_featured,
    })
}

async fn text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// A stored upload: its key plus the URL clients should fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUpload {
    pub object_key: String,
    pub url: String,
    pub source: ImageSource,
    pub mime_type: String,
    pub size: i64,
}

/// Write the bytes to the configured backend under a fresh key.
async fn store_bytes(
    state: &AppState,
    target: UploadTarget,
    data: Bytes,
    mime_type: &str,
) -> AppResult<StoredUpload> {
    let ext = extension_for_mime(mime_type).ok_or_else(|| {
        AppError::BadRequest(format!("Unsupported image type '{mime_type}'"))
    })?;
    let backend = state.config.image_backend;
    let key = target.key(backend, Uuid::new_v4(), ext);
    let size = data.len() as i64;

    match backend {
        ImageBackend::Object => state.blobs.put(&key, data, mime_type).await?,
        ImageBackend::Database => {
            state
                .storage
                .put_image_data(&NewImageData {
                    object_key: key.clone(),
                    mime_type: mime_type.to_string(),
                    data: data.to_vec(),
                })
                .await?;
        }
    }

    let resolved = resolve_image_ref(Some(&key), target.parent());
    tracing::info!(
        object_key = %key,
        backend = backend.as_str(),
        size,
        "Image bytes stored",
    );
    Ok(StoredUpload {
        object_key: key,
        url: resolved.url,
        source: resolved.source,
        mime_type: mime_type.to_string(),
        size,
    })
}

/// Pass a created record through, or drop the stored bytes if it failed.
async fn keep_or_purge<T>(
    state: &AppState,
    stored: &StoredUpload,
    created: StorageResult<T>,
) -> AppResult<T> {
    match created {
        Ok(record) => Ok(record),
        Err(err) => {
            purge_stored_bytes(state, Some(stored.object_key.as_str())).await;
            Err(err.into())
        }
    }
}

fn image_record(stored: &StoredUpload, form: &UploadForm) -> CreateImage {
    CreateImage {
        url: Some(stored.url.clone()),
        object_key: Some(stored.object_key.clone()),
        mime_type: Some(stored.mime_type.clone()),
        size: Some(stored.size),
        caption: form.caption.clone(),
        display_order: form.display_order,
        is_featured: form.is_featured,
    }
}

/// POST /api/properties/{id}/images/upload
pub async fn upload_property_image(
    State(state): State<AppState>,
    PathParam(property_id): PathParam<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<PropertyImage>>)> {
    require_property(&state, property_id).await?;
    let form = read_form(multipart, state.config.max_upload_bytes).await?;
    let stored = store_bytes(
        &state,
        UploadTarget::Property(property_id),
        form.data.clone(),
        &form.mime_type,
    )
    .await?;
    let created = state
        .storage
        .create_property_image(property_id, &image_record(&stored, &form))
        .await;
    let image = keep_or_purge(&state, &stored, created).await?;
    tracing::info!(image_id = image.id, property_id, "Property image uploaded");
    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// POST /api/property-units/{id}/images/upload
pub async fn upload_unit_image(
    State(state): State<AppState>,
    PathParam(unit_id): PathParam<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UnitImage>>)> {
    require_unit(&state, unit_id).await?;
    let form = read_form(multipart, state.config.max_upload_bytes).await?;
    let stored = store_bytes(
        &state,
        UploadTarget::Unit(unit_id),
        form.data.clone(),
        &form.mime_type,
    )
    .await?;
    let created = state
        .storage
        .create_unit_image(unit_id, &image_record(&stored, &form))
        .await;
    let image = keep_or_purge(&state, &stored, created).await?;
    tracing::info!(image_id = image.id, unit_id, "Unit image uploaded");
    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// POST /api/images/upload
///
/// Stores bytes without creating an image record; callers keep the key
/// (e.g. as a location or hotspot `imageUrl`).
pub async fn upload_standalone(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<StoredUpload>>)> {
    let form = read_form(multipart, state.config.max_upload_bytes).await?;
    let stored = store_bytes(&state, UploadTarget::Standalone, form.data, &form.mime_type).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}
