//! Handlers for the `/neighborhoods` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use estate_core::hotspots::{parse_hotspots, ExploreHotspot};
use estate_core::types::DbId;
use estate_db::models::neighborhood::{CreateNeighborhood, Neighborhood, UpdateNeighborhood};

use crate::error::{not_found, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::location::require_location;
use crate::response::DataResponse;
use crate::state::AppState;

async fn require_neighborhood(state: &AppState, id: DbId) -> AppResult<Neighborhood> {
    state
        .storage
        .get_neighborhood(id)
        .await?
        .ok_or_else(|| not_found("Neighborhood", id))
}

/// GET /api/neighborhoods
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Neighborhood>>>> {
    let neighborhoods = state.storage.list_neighborhoods().await?;
    Ok(Json(DataResponse {
        data: neighborhoods,
    }))
}

/// POST /api/neighborhoods
///
/// One neighborhood per location; a second is a 409.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNeighborhood>,
) -> AppResult<(StatusCode, Json<DataResponse<Neighborhood>>)> {
    require_location(&state, input.location_id).await?;
    parse_hotspots(input.explore_hotspots.as_deref())?;
    let neighborhood = state.storage.create_neighborhood(&input).await?;
    tracing::info!(
        neighborhood_id = neighborhood.id,
        location_id = neighborhood.location_id,
        "Neighborhood created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: neighborhood })))
}

/// GET /api/neighborhoods/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Neighborhood>>> {
    let neighborhood = require_neighborhood(&state, id).await?;
    Ok(Json(DataResponse { data: neighborhood }))
}

/// PUT /api/neighborhoods/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateNeighborhood>,
) -> AppResult<Json<DataResponse<Neighborhood>>> {
    parse_hotspots(input.explore_hotspots.as_deref())?;
    let neighborhood = state
        .storage
        .update_neighborhood(id, &input)
        .await?
        .ok_or_else(|| not_found("Neighborhood", id))?;
    tracing::info!(neighborhood_id = id, "Neighborhood updated");
    Ok(Json(DataResponse { data: neighborhood }))
}

/// DELETE /api/neighborhoods/{id}
pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<DbId>) -> AppResult<StatusCode> {
    if state.storage.delete_neighborhood(id).await? {
        tracing::info!(neighborhood_id = id, "Neighborhood deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Neighborhood", id))
    }
}

/// GET /api/neighborhoods/{id}/hotspots
pub async fn hotspots(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<ExploreHotspot>>>> {
    let neighborhood = require_neighborhood(&state, id).await?;
    let hotspots = parse_hotspots(neighborhood.explore_hotspots.as_deref())?;
    Ok(Json(DataResponse { data: hotspots }))
}
