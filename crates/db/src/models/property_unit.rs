//! Property unit models and DTOs (individual units of a multifamily property).

use estate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `property_units` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUnit {
    pub id: DbId,
    pub property_id: DbId,
    pub unit_number: String,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: Option<i32>,
    pub rent: i32,
    pub available: bool,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a unit. `available` defaults to `true`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyUnit {
    pub property_id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub unit_number: String,
    #[validate(range(min = 0, max = 100))]
    pub bedrooms: i32,
    #[validate(range(min = 0.0, max = 100.0))]
    pub bathrooms: f64,
    #[validate(range(min = 0))]
    pub square_feet: Option<i32>,
    #[validate(range(min = 0))]
    pub rent: i32,
    pub available: Option<bool>,
    pub description: Option<String>,
}

/// DTO for partially updating a unit.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyUnit {
    #[validate(length(min = 1, max = 50))]
    pub unit_number: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub bathrooms: Option<f64>,
    #[validate(range(min = 0))]
    pub square_feet: Option<i32>,
    #[validate(range(min = 0))]
    pub rent: Option<i32>,
    pub available: Option<bool>,
    pub description: Option<String>,
}
