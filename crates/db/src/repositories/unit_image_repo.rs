//! Repository for the `unit_images` table.
//!
//! Mirrors [`super::PropertyImageRepo`] with `unit_id` as the parent column.

use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::{CreateImage, UnitImage, UpdateImage};

const COLUMNS: &str = "\
    id, unit_id, url, object_key, mime_type, size, caption, \
    display_order, is_featured, created_at";

pub struct UnitImageRepo;

impl UnitImageRepo {
    pub async fn list_by_unit(pool: &PgPool, unit_id: DbId) -> Result<Vec<UnitImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM unit_images
             WHERE unit_id = $1
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, UnitImage>(&query)
            .bind(unit_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UnitImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unit_images WHERE id = $1");
        sqlx::query_as::<_, UnitImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        unit_id: DbId,
        input: &CreateImage,
    ) -> Result<UnitImage, sqlx::Error> {
        let query = format!(
            "WITH clear_old AS (
                UPDATE unit_images
                SET is_featured = false
                WHERE unit_id = $1 AND is_featured = true AND $8::BOOLEAN
            )
            INSERT INTO unit_images
                (unit_id, url, object_key, mime_type, size, caption,
                 display_order, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6,
                COALESCE($7::INTEGER, (
                    SELECT COALESCE(LEAST(MAX(display_order), 2147483646) + 1, 0)
                    FROM unit_images WHERE unit_id = $1
                )),
                $8)
            RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnitImage>(&query)
            .bind(unit_id)
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

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateImage,
    ) -> Result<Option<UnitImage>, sqlx::Error> {
        let query = format!(
            "WITH target AS (
                SELECT unit_id FROM unit_images WHERE id = $1
            ),
            clear_old AS (
                UPDATE unit_images
                SET is_featured = false
                WHERE unit_id = (SELECT unit_id FROM target)
                  AND is_featured = true
                  AND id != $1
                  AND $5::BOOLEAN IS TRUE
            )
            UPDATE unit_images SET
                url = COALESCE($2, url),
                caption = COALESCE($3, caption),
                display_order = COALESCE($4, display_order),
                is_featured = COALESCE($5, is_featured)
            WHERE id = $1
            RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnitImage>(&query)
            .bind(id)
            .bind(&input.url)
            .bind(&input.caption)
            .bind(input.display_order)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_featured(pool: &PgPool, id: DbId) -> Result<Option<UnitImage>, sqlx::Error> {
        let query = format!(
            "WITH target AS (
                SELECT unit_id FROM unit_images WHERE id = $1
            ),
            clear_old AS (
                UPDATE unit_images
                SET is_featured = false
                WHERE unit_id = (SELECT unit_id FROM target)
                  AND is_featured = true
                  AND id != $1
            )
            UPDATE unit_images
            SET is_featured = true
            WHERE id = $1
            RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnitImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<UnitImage>, sqlx::Error> {
        let query = format!("DELETE FROM unit_images WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, UnitImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
