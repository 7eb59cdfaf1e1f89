//! Repository for the `image_storage` table (database-resident image bytes).

use sqlx::PgPool;

use crate::models::image_storage::{ImageData, NewImageData};

const COLUMNS: &str = "id, object_key, mime_type, size, data, created_at";

pub struct ImageStorageRepo;

impl ImageStorageRepo {
    /// Store image bytes under a new key. A taken key violates
    /// `uq_image_storage_object_key`.
    pub async fn insert(pool: &PgPool, input: &NewImageData) -> Result<ImageData, sqlx::Error> {
        let query = format!(
            "INSERT INTO image_storage (object_key, mime_type, size, data)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ImageData>(&query)
            .bind(&input.object_key)
            .bind(&input.mime_type)
            .bind(input.size())
            .bind(&input.data)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_key(pool: &PgPool, object_key: &str) -> Result<Option<ImageData>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM image_storage WHERE object_key = $1");
        sqlx::query_as::<_, ImageData>(&query)
            .bind(object_key)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_by_key(pool: &PgPool, object_key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM image_storage WHERE object_key = $1")
            .bind(object_key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
