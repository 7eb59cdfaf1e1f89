//! Repository for the `properties` table.

use estate_core::listing::DEFAULT_PROPERTY_TYPE;
use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};

const COLUMNS: &str = "\
    id, location_id, title, address, description, bedrooms, bathrooms, \
    square_feet, rent, available, property_type, unit_count, image_url, \
    created_at, updated_at";

/// Provides CRUD operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// List properties matching every set field of `filter`, ordered by id.
    pub async fn list(pool: &PgPool, filter: &PropertyFilter) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM properties
             WHERE ($1::BIGINT IS NULL OR location_id = $1)
               AND ($2::BOOLEAN IS NULL OR available = $2)
               AND ($3::TEXT IS NULL OR property_type = $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(filter.location_id)
            .bind(filter.available)
            .bind(&filter.property_type)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a property. Omitted `available`, `property_type` and
    /// `square_feet` take their defaults here so both backends agree.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties
                (location_id, title, address, description, bedrooms, bathrooms,
                 square_feet, rent, available, property_type, unit_count, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(input.location_id)
            .bind(&input.title)
            .bind(&input.address)
            .bind(&input.description)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.square_feet.unwrap_or(0))
            .bind(input.rent)
            .bind(input.available.unwrap_or(true))
            .bind(
                input
                    .property_type
                    .as_deref()
                    .unwrap_or(DEFAULT_PROPERTY_TYPE),
            )
            .bind(input.unit_count)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Partially update a property using `COALESCE`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                location_id = COALESCE($2, location_id),
                title = COALESCE($3, title),
                address = COALESCE($4, address),
                description = COALESCE($5, description),
                bedrooms = COALESCE($6, bedrooms),
                bathrooms = COALESCE($7, bathrooms),
                square_feet = COALESCE($8, square_feet),
                rent = COALESCE($9, rent),
                available = COALESCE($10, available),
                property_type = COALESCE($11, property_type),
                unit_count = COALESCE($12, unit_count),
                image_url = COALESCE($13, image_url),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(input.location_id)
            .bind(&input.title)
            .bind(&input.address)
            .bind(&input.description)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.square_feet)
            .bind(input.rent)
            .bind(input.available)
            .bind(&input.property_type)
            .bind(input.unit_count)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a property. Units and images cascade; inquiries keep their
    /// snapshot name with `property_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
