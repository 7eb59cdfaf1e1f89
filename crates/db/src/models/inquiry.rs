//! Inquiry models and DTOs.

use estate_core::inquiry::InquiryStatus;
use estate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `inquiries` table.
///
/// `status` is always one of `new`, `contacted`, `resolved` (checked on
/// write and by a table constraint).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: Option<DbId>,
    pub property_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for submitting an inquiry. `status` defaults to `new`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiry {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
    pub property_id: Option<DbId>,
    pub property_name: Option<String>,
    pub status: Option<InquiryStatus>,
}

/// Body of `PATCH /api/inquiries/{id}/status`.
///
/// Kept as a raw string so unsupported values surface as a validation error.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInquiryStatus {
    #[validate(length(min = 1))]
    pub status: String,
}

/// Optional `?status=` filter for listing inquiries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryFilter {
    pub status: Option<InquiryStatus>,
}
