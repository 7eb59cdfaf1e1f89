//! Repository for the `property_units` table.

use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::property_unit::{CreatePropertyUnit, PropertyUnit, UpdatePropertyUnit};

const COLUMNS: &str = "\
    id, property_id, unit_number, bedrooms, bathrooms, square_feet, rent, \
    available, description, created_at, updated_at";

pub struct PropertyUnitRepo;

impl PropertyUnitRepo {
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<PropertyUnit>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM property_units WHERE property_id = $1 ORDER BY id");
        sqlx::query_as::<_, PropertyUnit>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PropertyUnit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_units WHERE id = $1");
        sqlx::query_as::<_, PropertyUnit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreatePropertyUnit,
    ) -> Result<PropertyUnit, sqlx::Error> {
        let query = format!(
            "INSERT INTO property_units
                (property_id, unit_number, bedrooms, bathrooms, square_feet, rent,
                 available, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyUnit>(&query)
            .bind(input.property_id)
            .bind(&input.unit_number)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.square_feet)
            .bind(input.rent)
            .bind(input.available.unwrap_or(true))
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePropertyUnit,
    ) -> Result<Option<PropertyUnit>, sqlx::Error> {
        let query = format!(
            "UPDATE property_units SET
                unit_number = COALESCE($2, unit_number),
                bedrooms = COALESCE($3, bedrooms),
                bathrooms = COALESCE($4, bathrooms),
                square_feet = COALESCE($5, square_feet),
                rent = COALESCE($6, rent),
                available = COALESCE($7, available),
                description = COALESCE($8, description),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyUnit>(&query)
            .bind(id)
            .bind(&input.unit_number)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.square_feet)
            .bind(input.rent)
            .bind(input.available)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM property_units WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
