//! Repository for the `neighborhoods` table.

use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::neighborhood::{CreateNeighborhood, Neighborhood, UpdateNeighborhood};

const COLUMNS: &str = "\
    id, location_id, description, highlights, attractions, transportation, \
    dining, schools, parks, history, explore_description, explore_map_url, \
    explore_hotspots, created_at, updated_at";

/// Provides CRUD operations for neighborhoods.
pub struct NeighborhoodRepo;

impl NeighborhoodRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Neighborhood>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM neighborhoods ORDER BY id");
        sqlx::query_as::<_, Neighborhood>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Neighborhood>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM neighborhoods WHERE id = $1");
        sqlx::query_as::<_, Neighborhood>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the (single) neighborhood of a location.
    pub async fn find_by_location(
        pool: &PgPool,
        location_id: DbId,
    ) -> Result<Option<Neighborhood>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM neighborhoods WHERE location_id = $1");
        sqlx::query_as::<_, Neighborhood>(&query)
            .bind(location_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a neighborhood. A second one for the same location violates
    /// `uq_neighborhoods_location_id`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNeighborhood,
    ) -> Result<Neighborhood, sqlx::Error> {
        let query = format!(
            "INSERT INTO neighborhoods
                (location_id, description, highlights, attractions, transportation,
                 dining, schools, parks, history, explore_description,
                 explore_map_url, explore_hotspots)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Neighborhood>(&query)
            .bind(input.location_id)
            .bind(&input.description)
            .bind(&input.highlights)
            .bind(&input.attractions)
            .bind(&input.transportation)
            .bind(&input.dining)
            .bind(&input.schools)
            .bind(&input.parks)
            .bind(&input.history)
            .bind(&input.explore_description)
            .bind(&input.explore_map_url)
            .bind(&input.explore_hotspots)
            .fetch_one(pool)
            .await
    }

    /// Partially update a neighborhood using `COALESCE`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNeighborhood,
    ) -> Result<Option<Neighborhood>, sqlx::Error> {
        let query = format!(
            "UPDATE neighborhoods SET
                description = COALESCE($2, description),
                highlights = COALESCE($3, highlights),
                attractions = COALESCE($4, attractions),
                transportation = COALESCE($5, transportation),
                dining = COALESCE($6, dining),
                schools = COALESCE($7, schools),
                parks = COALESCE($8, parks),
                history = COALESCE($9, history),
                explore_description = COALESCE($10, explore_description),
                explore_map_url = COALESCE($11, explore_map_url),
                explore_hotspots = COALESCE($12, explore_hotspots),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Neighborhood>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(&input.highlights)
            .bind(&input.attractions)
            .bind(&input.transportation)
            .bind(&input.dining)
            .bind(&input.schools)
            .bind(&input.parks)
            .bind(&input.history)
            .bind(&input.explore_description)
            .bind(&input.explore_map_url)
            .bind(&input.explore_hotspots)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM neighborhoods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
