//! Property models, DTOs and list filter.

use estate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `properties` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: DbId,
    pub location_id: DbId,
    pub title: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: i32,
    pub rent: i32,
    pub available: bool,
    pub property_type: String,
    pub unit_count: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a property.
///
/// `available` defaults to `true`, `property_type` to `apartment` and
/// `square_feet` to `0` when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperty {
    pub location_id: DbId,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub address: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub bedrooms: i32,
    #[validate(range(min = 0.0, max = 100.0))]
    pub bathrooms: f64,
    #[validate(range(min = 0))]
    pub square_feet: Option<i32>,
    #[validate(range(min = 0))]
    pub rent: i32,
    pub available: Option<bool>,
    pub property_type: Option<String>,
    pub unit_count: Option<i32>,
    pub image_url: Option<String>,
}

/// DTO for partially updating a property.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProperty {
    pub location_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub bathrooms: Option<f64>,
    #[validate(range(min = 0))]
    pub square_feet: Option<i32>,
    #[validate(range(min = 0))]
    pub rent: Option<i32>,
    pub available: Option<bool>,
    pub property_type: Option<String>,
    pub unit_count: Option<i32>,
    pub image_url: Option<String>,
}

/// Optional filters for listing properties (`?locationId=&available=&propertyType=`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    pub location_id: Option<DbId>,
    pub available: Option<bool>,
    pub property_type: Option<String>,
}

impl PropertyFilter {
    /// Filter that matches every property in one location.
    pub fn for_location(location_id: DbId) -> Self {
        Self {
            location_id: Some(location_id),
            ..Self::default()
        }
    }

    /// Whether `property` satisfies every set filter.
    pub fn matches(&self, property: &Property) -> bool {
        self.location_id.is_none_or(|id| property.location_id == id)
            && self.available.is_none_or(|a| property.available == a)
            && self
                .property_type
                .as_deref()
                .is_none_or(|t| property.property_type == t)
    }
}
