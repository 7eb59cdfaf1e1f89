//! Handlers for the `/properties` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::listing::{validate_property_type, validate_unit_count, DEFAULT_PROPERTY_TYPE};
use estate_core::types::{DbId, ImageParent};
use estate_db::models::image::{CreateImage, PropertyImage};
use estate_db::models::property::{CreateProperty, Property, UpdateProperty};
use estate_db::models::property_unit::PropertyUnit;

use crate::error::{not_found, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::image::{purge_stored_bytes, with_resolved_url};
use crate::handlers::location::require_location;
use crate::query::PropertyListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a property or fail with 404.
pub(crate) async fn require_property(state: &AppState, id: DbId) -> AppResult<Property> {
    state
        .storage
        .get_property(id)
        .await?
        .ok_or_else(|| not_found("Property", id))
}

/// GET /api/properties
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PropertyListParams>,
) -> AppResult<Json<DataResponse<Vec<Property>>>> {
    let filter = params.into_filter()?;
    let properties = state.storage.list_properties(&filter).await?;
    Ok(Json(DataResponse { data: properties }))
}

/// POST /api/properties
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProperty>,
) -> AppResult<(StatusCode, Json<DataResponse<Property>>)> {
    let property_type = input.property_type.as_deref().unwrap_or(DEFAULT_PROPERTY_TYPE);
    validate_property_type(property_type)?;
    validate_unit_count(property_type, input.unit_count)?;
    require_location(&state, input.location_id).await?;

    let property = state.storage.create_property(&input).await?;
    tracing::info!(
        property_id = property.id,
        location_id = property.location_id,
        "Property created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: property })))
}

/// GET /api/properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Property>>> {
    let property = require_property(&state, id).await?;
    Ok(Json(DataResponse { data: property }))
}

/// PUT /api/properties/{id}
///
/// The type and unit-count rules are checked against the merged result,
/// so `unitCount` alone can be sent for an existing multifamily property,
/// and a stored `unitCount` blocks a change away from multifamily.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProperty>,
) -> AppResult<Json<DataResponse<Property>>> {
    let existing = require_property(&state, id).await?;
    let property_type = input
        .property_type
        .as_deref()
        .unwrap_or(&existing.property_type);
    validate_property_type(property_type)?;
    validate_unit_count(property_type, input.unit_count.or(existing.unit_count))?;
    if let Some(location_id) = input.location_id {
        require_location(&state, location_id).await?;
    }

    let property = state
        .storage
        .update_property(id, &input)
        .await?
        .ok_or_else(|| not_found("Property", id))?;
    tracing::info!(property_id = id, "Property updated");
    Ok(Json(DataResponse { data: property }))
}

/// Keys of every stored image under a property, unit images included.
pub(crate) async fn stored_image_keys(
    state: &AppState,
    property_id: DbId,
) -> AppResult<Vec<String>> {
    let mut keys: Vec<String> = state
        .storage
        .list_property_images(property_id)
        .await?
        .into_iter()
        .filter_map(|img| img.object_key)
        .collect();
    for unit in state.storage.list_units(property_id).await? {
        keys.extend(
            state
                .storage
                .list_unit_images(unit.id)
                .await?
                .into_iter()
                .filter_map(|img| img.object_key),
        );
    }
    Ok(keys)
}

/// DELETE /api/properties/{id}
///
/// Units and images go with the property; stored bytes are purged after.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let keys = stored_image_keys(&state, id).await?;
    if !state.storage.delete_property(id).await? {
        return Err(not_found("Property", id));
    }
    for key in &keys {
        purge_stored_bytes(&state, Some(key.as_str())).await;
    }
    tracing::info!(property_id = id, purged_images = keys.len(), "Property deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/properties/{id}/units
pub async fn list_units(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<PropertyUnit>>>> {
    require_property(&state, id).await?;
    let units = state.storage.list_units(id).await?;
    Ok(Json(DataResponse { data: units }))
}

/// GET /api/properties/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<PropertyImage>>>> {
    require_property(&state, id).await?;
    let images = state.storage.list_property_images(id).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/properties/{id}/images
pub async fn create_image(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<CreateImage>,
) -> AppResult<(StatusCode, Json<DataResponse<PropertyImage>>)> {
    require_property(&state, id).await?;
    let input = with_resolved_url(input, ImageParent::Property);
    let image = state.storage.create_property_image(id, &input).await?;
    tracing::info!(image_id = image.id, property_id = id, "Property image attached");
    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}
