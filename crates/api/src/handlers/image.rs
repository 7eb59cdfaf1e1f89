//! Handlers for image records under `/property-images` and `/unit-images`.
//!
//! `GET /{ref}` on either prefix serves two shapes: a numeric ref is an image
//! record id and returns JSON, anything else is a database image key and
//! returns the stored bytes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use estate_core::image_ref::{is_database_key, is_object_key, resolve_image_url};
use estate_core::types::{DbId, ImageParent};
use estate_db::models::image::{CreateImage, PropertyImage, UnitImage, UpdateImage};

use crate::error::{not_found, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::media::database_image_response;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fill a missing `url` with the resolved URL of the object key.
pub(crate) fn with_resolved_url(mut input: CreateImage, parent: ImageParent) -> CreateImage {
    if input.url.is_none() {
        input.url = input
            .object_key
            .as_deref()
            .map(|key| resolve_image_url(Some(key), Some(parent)));
    }
    input
}

/// Delete the bytes behind an image key. Failures are logged, not returned.
pub(crate) async fn purge_stored_bytes(state: &AppState, object_key: Option<&str>) {
    let Some(key) = object_key else {
        return;
    };
    if is_database_key(key) {
        if let Err(err) = state.storage.delete_image_data(key).await {
            tracing::warn!(object_key = key, error = %err, "Failed to delete database image");
        }
    } else if is_object_key(key) {
        if let Err(err) = state.blobs.delete(key).await {
            tracing::warn!(object_key = key, error = %err, "Failed to delete object");
        }
    }
}

// ---------------------------------------------------------------------------
// Property images
// ---------------------------------------------------------------------------

/// GET /api/property-images/{ref}
pub async fn get_property_image(
    State(state): State<AppState>,
    PathParam(reference): PathParam<String>,
) -> AppResult<Response> {
    let Ok(id) = reference.parse::<DbId>() else {
        return Ok(database_image_response(&state, &reference).await);
    };
    let image = state
        .storage
        .get_property_image(id)
        .await?
        .ok_or_else(|| not_found("PropertyImage", id))?;
    Ok(Json(DataResponse { data: image }).into_response())
}

/// PUT /api/property-images/{id}
pub async fn update_property_image(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateImage>,
) -> AppResult<Json<DataResponse<PropertyImage>>> {
    let image = state
        .storage
        .update_property_image(id, &input)
        .await?
        .ok_or_else(|| not_found("PropertyImage", id))?;
    tracing::info!(image_id = id, property_id = image.property_id, "Property image updated");
    Ok(Json(DataResponse { data: image }))
}

/// DELETE /api/property-images/{id}
pub async fn delete_property_image(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let image = state
        .storage
        .delete_property_image(id)
        .await?
        .ok_or_else(|| not_found("PropertyImage", id))?;
    purge_stored_bytes(&state, image.object_key.as_deref()).await;
    tracing::info!(image_id = id, property_id = image.property_id, "Property image deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/property-images/{id}/featured
pub async fn feature_property_image(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<PropertyImage>>> {
    let image = state
        .storage
        .set_featured_property_image(id)
        .await?
        .ok_or_else(|| not_found("PropertyImage", id))?;
    tracing::info!(image_id = id, property_id = image.property_id, "Featured property image set");
    Ok(Json(DataResponse { data: image }))
}

// ---------------------------------------------------------------------------
// Unit images
// ---------------------------------------------------------------------------

/// GET /api/unit-images/{ref}
pub async fn get_unit_image(
    State(state): State<AppState>,
    PathParam(reference): PathParam<String>,
) -> AppResult<Response> {
    let Ok(id) = reference.parse::<DbId>() else {
        return Ok(database_image_response(&state, &reference).await);
    };
    let image = state
        .storage
        .get_unit_image(id)
        .await?
        .ok_or_else(|| not_found("UnitImage", id))?;
    Ok(Json(DataResponse { data: image }).into_response())
}

/// PUT /api/unit-images/{id}
pub async fn update_unit_image(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateImage>,
) -> AppResult<Json<DataResponse<UnitImage>>> {
    let image = state
        .storage
        .update_unit_image(id, &input)
        .await?
        .ok_or_else(|| not_found("UnitImage", id))?;
    tracing::info!(image_id = id, unit_id = image.unit_id, "Unit image updated");
    Ok(Json(DataResponse { data: image }))
}

/// DELETE /api/unit-images/{id}
pub async fn delete_unit_image(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let image = state
        .storage
        .delete_unit_image(id)
        .await?
        .ok_or_else(|| not_found("UnitImage", id))?;
    purge_stored_bytes(&state, image.object_key.as_deref()).await;
    tracing::info!(image_id = id, unit_id = image.unit_id, "Unit image deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/unit-images/{id}/featured
pub async fn feature_unit_image(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<UnitImage>>> {
    let image = state
        .storage
        .set_featured_unit_image(id)
        .await?
        .ok_or_else(|| not_found("UnitImage", id))?;
    tracing::info!(image_id = id, unit_id = image.unit_id, "Featured unit image set");
    Ok(Json(DataResponse { data: image }))
}
