//! Property and unit image models.
//!
//! Both tables share one shape: a legacy `url`, blob metadata
//! (`object_key`, `mime_type`, `size`), a `display_order` sort key and an
//! `is_featured` flag. At most one image per parent is featured; writers
//! clear siblings before setting the flag.

use estate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Upper bound accepted for `display_order`; matches the validator ranges below.
pub const MAX_DISPLAY_ORDER: i32 = 1_000_000;

/// A row from the `property_images` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub id: DbId,
    pub property_id: DbId,
    pub url: Option<String>,
    pub object_key: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub caption: Option<String>,
    pub display_order: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
}

/// A row from the `unit_images` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitImage {
    pub id: DbId,
    pub unit_id: DbId,
    pub url: Option<String>,
    pub object_key: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub caption: Option<String>,
    pub display_order: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
}

/// DTO for attaching an image to a property or unit.
///
/// The parent id comes from the route. At least one of `url` and
/// `object_key` must be set.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_image_source"))]
pub struct CreateImage {
    #[validate(length(min = 1, max = 2048))]
    pub url: Option<String>,
    #[validate(length(min = 1, max = 1024))]
    pub object_key: Option<String>,
    pub mime_type: Option<String>,
    #[validate(range(min = 0))]
    pub size: Option<i64>,
    pub caption: Option<String>,
    #[validate(range(min = 0, max = 1_000_000))]
    pub display_order: Option<i32>,
    pub is_featured: Option<bool>,
}

fn validate_image_source(image: &CreateImage) -> Result<(), ValidationError> {
    if image.url.is_none() && image.object_key.is_none() {
        let mut err = ValidationError::new("image_source");
        err.message = Some("Either url or objectKey is required".into());
        return Err(err);
    }
    Ok(())
}

/// DTO for partially updating an image record.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImage {
    #[validate(length(min = 1, max = 2048))]
    pub url: Option<String>,
    pub caption: Option<String>,
    #[validate(range(min = 0, max = 1_000_000))]
    pub display_order: Option<i32>,
    pub is_featured: Option<bool>,
}
