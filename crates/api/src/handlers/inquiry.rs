//! Handlers for the `/inquiries` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::inquiry::InquiryStatus;
use estate_core::types::DbId;
use estate_db::models::inquiry::{CreateInquiry, Inquiry, UpdateInquiryStatus};

use crate::error::{not_found, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::property::require_property;
use crate::query::InquiryListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/inquiries
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<InquiryListParams>,
) -> AppResult<Json<DataResponse<Vec<Inquiry>>>> {
    let filter = params.into_filter()?;
    let inquiries = state.storage.list_inquiries(&filter).await?;
    Ok(Json(DataResponse { data: inquiries }))
}

/// POST /api/inquiries
///
/// A referenced property must exist; its title is snapshotted into
/// `propertyName` when the form leaves it empty.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<CreateInquiry>,
) -> AppResult<(StatusCode, Json<DataResponse<Inquiry>>)> {
    if let Some(property_id) = input.property_id {
        let property = require_property(&state, property_id).await?;
        if input.property_name.is_none() {
            input.property_name = Some(property.title);
        }
    }
    let inquiry = state.storage.create_inquiry(&input).await?;
    tracing::info!(
        inquiry_id = inquiry.id,
        property_id = ?inquiry.property_id,
        status = %inquiry.status,
        "Inquiry received",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: inquiry })))
}

/// GET /api/inquiries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Inquiry>>> {
    let inquiry = state
        .storage
        .get_inquiry(id)
        .await?
        .ok_or_else(|| not_found("Inquiry", id))?;
    Ok(Json(DataResponse { data: inquiry }))
}

/// PATCH /api/inquiries/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateInquiryStatus>,
) -> AppResult<Json<DataResponse<Inquiry>>> {
    let status = InquiryStatus::parse(&input.status)?;
    let inquiry = state
        .storage
        .update_inquiry_status(id, status)
        .await?
        .ok_or_else(|| not_found("Inquiry", id))?;
    tracing::info!(inquiry_id = id, %status, "Inquiry status changed");
    Ok(Json(DataResponse { data: inquiry }))
}

/// DELETE /api/inquiries/{id}
pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<DbId>) -> AppResult<StatusCode> {
    if state.storage.delete_inquiry(id).await? {
        tracing::info!(inquiry_id = id, "Inquiry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Inquiry", id))
    }
}
