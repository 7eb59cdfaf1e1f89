//! Repository for the `locations` table.

use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location, UpdateLocation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, description, image_url, link_text, created_at, updated_at";

/// Provides CRUD operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// List all locations ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY id");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Find a location by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a location by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE slug = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new location, returning the created row.
    ///
    /// A duplicate slug violates `uq_locations_slug`.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (slug, name, description, image_url, link_text)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.link_text)
            .fetch_one(pool)
            .await
    }

    /// Update a location. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                link_text = COALESCE($5, link_text),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.link_text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a location by ID. Neighborhoods and properties cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
