//! Handlers for the `/property-units` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use estate_core::types::{DbId, ImageParent};
use estate_db::models::image::{CreateImage, UnitImage};
use estate_db::models::property_unit::{CreatePropertyUnit, PropertyUnit, UpdatePropertyUnit};

use crate::error::{not_found, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::image::{purge_stored_bytes, with_resolved_url};
use crate::handlers::property::require_property;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a unit or fail with 404.
pub(crate) async fn require_unit(state: &AppState, id: DbId) -> AppResult<PropertyUnit> {
    state
        .storage
        .get_unit(id)
        .await?
        .ok_or_else(|| not_found("PropertyUnit", id))
}

/// POST /api/property-units
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePropertyUnit>,
) -> AppResult<(StatusCode, Json<DataResponse<PropertyUnit>>)> {
    require_property(&state, input.property_id).await?;
    let unit = state.storage.create_unit(&input).await?;
    tracing::info!(unit_id = unit.id, property_id = unit.property_id, "Unit created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: unit })))
}

/// GET /api/property-units/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<PropertyUnit>>> {
    let unit = require_unit(&state, id).await?;
    Ok(Json(DataResponse { data: unit }))
}

/// PUT /api/property-units/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePropertyUnit>,
) -> AppResult<Json<DataResponse<PropertyUnit>>> {
    let unit = state
        .storage
        .update_unit(id, &input)
        .await?
        .ok_or_else(|| not_found("PropertyUnit", id))?;
    tracing::info!(unit_id = id, "Unit updated");
    Ok(Json(DataResponse { data: unit }))
}

/// DELETE /api/property-units/{id}
pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<DbId>) -> AppResult<StatusCode> {
    let keys: Vec<String> = state
        .storage
        .list_unit_images(id)
        .await?
        .into_iter()
        .filter_map(|img| img.object_key)
        .collect();
    if !state.storage.delete_unit(id).await? {
        return Err(not_found("PropertyUnit", id));
    }
    for key in &keys {
        purge_stored_bytes(&state, Some(key.as_str())).await;
    }
    tracing::info!(unit_id = id, "Unit deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/property-units/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<UnitImage>>>> {
    require_unit(&state, id).await?;
    let images = state.storage.list_unit_images(id).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/property-units/{id}/images
pub async fn create_image(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<CreateImage>,
) -> AppResult<(StatusCode, Json<DataResponse<UnitImage>>)> {
    require_unit(&state, id).await?;
    let input = with_resolved_url(input, ImageParent::Unit);
    let image = state.storage.create_unit_image(id, &input).await?;
    tracing::info!(image_id = image.id, unit_id = id, "Unit image attached");
    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}
