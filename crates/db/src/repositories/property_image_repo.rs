//! Repository for the `property_images` table.
//!
//! Featured-flag writes clear the flag on sibling rows in the same
//! statement through a data-modifying CTE.

use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::{CreateImage, PropertyImage, UpdateImage};

const COLUMNS: &str = "\
    id, property_id, url, object_key, mime_type, size, caption, \
    display_order, is_featured, created_at";

/// Provides CRUD and featured-image operations for property images.
pub struct PropertyImageRepo;

impl PropertyImageRepo {
    /// List a property's images in display order.
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<PropertyImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM property_images
             WHERE property_id = $1
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PropertyImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_images WHERE id = $1");
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Attach an image to a property.
    ///
    /// Without an explicit `display_order` the image goes after the last one.
    /// When `is_featured` is set, siblings lose the flag.
    pub async fn create(
        pool: &PgPool,
        property_id: DbId,
        input: &CreateImage,
    ) -> Result<PropertyImage, sqlx::Error> {
        let query = format!(
            "WITH clear_old AS (
                UPDATE property_images
                SET is_featured = false
                WHERE property_id = $1 AND is_featured = true AND $8::BOOLEAN
            )
            INSERT INTO property_images
                (property_id, url, object_key, mime_type, size, caption,
                 display_order, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6,
                COALESCE($7::INTEGER, (
                    SELECT COALESCE(LEAST(MAX(display_order), 2147483646) + 1, 0)
                    FROM property_images WHERE property_id = $1
                )),
                $8)
            RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(property_id)
            .bind(&input.url)
            .bind(&input.object_key)
            .bind(&input.mime_type)
            .bind(input.size)
            .bind(&input.caption)
            .bind(input.display_order)
            .bind(input.is_featured.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Partially update an image. `is_featured = Some(true)` clears siblings.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateImage,
    ) -> Result<Option<PropertyImage>, sqlx::Error> {
        let query = format!(
            "WITH target AS (
                SELECT property_id FROM property_images WHERE id = $1
            ),
            clear_old AS (
                UPDATE property_images
                SET is_featured = false
                WHERE property_id = (SELECT property_id FROM target)
                  AND is_featured = true
                  AND id != $1
                  AND $5::BOOLEAN IS TRUE
            )
            UPDATE property_images SET
                url = COALESCE($2, url),
                caption = COALESCE($3, caption),
                display_order = COALESCE($4, display_order),
                is_featured = COALESCE($5, is_featured)
            WHERE id = $1
            RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(id)
            .bind(&input.url)
            .bind(&input.caption)
            .bind(input.display_order)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Atomically clear the previous featured image of the property and
    /// feature `id`.
    pub async fn set_featured(pool: &PgPool, id: DbId) -> Result<Option<PropertyImage>, sqlx::Error> {
        let query = format!(
            "WITH target AS (
                SELECT property_id FROM property_images WHERE id = $1
            ),
            clear_old AS (
                UPDATE property_images
                SET is_featured = false
                WHERE property_id = (SELECT property_id FROM target)
                  AND is_featured = true
                  AND id != $1
            )
            UPDATE property_images
            SET is_featured = true
            WHERE id = $1
            RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an image, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<PropertyImage>, sqlx::Error> {
        let query = format!("DELETE FROM property_images WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
