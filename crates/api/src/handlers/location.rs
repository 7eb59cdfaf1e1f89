//! Handlers for the `/locations` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use estate_core::listing::validate_slug;
use estate_core::types::DbId;
use estate_db::models::location::{CreateLocation, Location, UpdateLocation};
use estate_db::models::neighborhood::Neighborhood;
use estate_db::models::property::{Property, PropertyFilter};

use crate::error::{not_found, AppError, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::image::purge_stored_bytes;
use crate::handlers::property::stored_image_keys;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a location or fail with 404.
pub(crate) async fn require_location(state: &AppState, id: DbId) -> AppResult<Location> {
    state
        .storage
        .get_location(id)
        .await?
        .ok_or_else(|| not_found("Location", id))
}

/// GET /api/locations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Location>>>> {
    let locations = state.storage.list_locations().await?;
    Ok(Json(DataResponse { data: locations }))
}

/// POST /api/locations
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateLocation>,
) -> AppResult<(StatusCode, Json<DataResponse<Location>>)> {
    validate_slug(&input.slug)?;
    let location = state.storage.create_location(&input).await?;
    tracing::info!(location_id = location.id, slug = %location.slug, "Location created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: location })))
}

/// GET /api/locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Location>>> {
    let location = require_location(&state, id).await?;
    Ok(Json(DataResponse { data: location }))
}

/// GET /api/locations/by-slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    PathParam(slug): PathParam<String>,
) -> AppResult<Json<DataResponse<Location>>> {
    let location = state
        .storage
        .get_location_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFoundMessage(format!("Location '{slug}' not found")))?;
    Ok(Json(DataResponse { data: location }))
}

/// PUT /api/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateLocation>,
) -> AppResult<Json<DataResponse<Location>>> {
    let location = state
        .storage
        .update_location(id, &input)
        .await?
        .ok_or_else(|| not_found("Location", id))?;
    tracing::info!(location_id = id, "Location updated");
    Ok(Json(DataResponse { data: location }))
}

/// DELETE /api/locations/{id}
///
/// Removes the neighborhood and every property (with units and images),
/// then purges the stored image bytes.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let mut keys = Vec::new();
    for property in state
        .storage
        .list_properties(&PropertyFilter::for_location(id))
        .await?
    {
        keys.extend(stored_image_keys(&state, property.id).await?);
    }
    if !state.storage.delete_location(id).await? {
        return Err(not_found("Location", id));
    }
    for key in &keys {
        purge_stored_bytes(&state, Some(key.as_str())).await;
    }
    tracing::info!(location_id = id, purged_images = keys.len(), "Location deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/locations/{id}/properties
pub async fn list_properties(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<Property>>>> {
    require_location(&state, id).await?;
    let properties = state
        .storage
        .list_properties(&PropertyFilter::for_location(id))
        .await?;
    Ok(Json(DataResponse { data: properties }))
}

/// GET /api/locations/{id}/neighborhood
pub async fn get_neighborhood(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Neighborhood>>> {
    require_location(&state, id).await?;
    let neighborhood = state
        .storage
        .get_neighborhood_by_location(id)
        .await?
        .ok_or_else(|| AppError::NotFoundMessage(format!("Location {id} has no neighborhood")))?;
    Ok(Json(DataResponse { data: neighborhood }))
}
