//! Neighborhood models and DTOs.
//!
//! Each location has at most one neighborhood. `explore_hotspots` holds the
//! JSON-encoded hotspot array as text; see `estate_core::hotspots`.

use estate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `neighborhoods` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: DbId,
    pub location_id: DbId,
    pub description: Option<String>,
    pub highlights: Option<String>,
    pub attractions: Option<String>,
    pub transportation: Option<String>,
    pub dining: Option<String>,
    pub schools: Option<String>,
    pub parks: Option<String>,
    pub history: Option<String>,
    pub explore_description: Option<String>,
    pub explore_map_url: Option<String>,
    pub explore_hotspots: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a neighborhood.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNeighborhood {
    pub location_id: DbId,
    pub description: Option<String>,
    pub highlights: Option<String>,
    pub attractions: Option<String>,
    pub transportation: Option<String>,
    pub dining: Option<String>,
    pub schools: Option<String>,
    pub parks: Option<String>,
    pub history: Option<String>,
    pub explore_description: Option<String>,
    #[validate(length(max = 2048))]
    pub explore_map_url: Option<String>,
    pub explore_hotspots: Option<String>,
}

/// DTO for partially updating a neighborhood.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNeighborhood {
    pub description: Option<String>,
    pub highlights: Option<String>,
    pub attractions: Option<String>,
    pub transportation: Option<String>,
    pub dining: Option<String>,
    pub schools: Option<String>,
    pub parks: Option<String>,
    pub history: Option<String>,
    pub explore_description: Option<String>,
    #[validate(length(max = 2048))]
    pub explore_map_url: Option<String>,
    pub explore_hotspots: Option<String>,
}
