//! Repository for the `inquiries` table.

use estate_core::inquiry::InquiryStatus;
use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::inquiry::{CreateInquiry, Inquiry, InquiryFilter};

const COLUMNS: &str = "\
    id, name, email, phone, message, property_id, property_name, status, created_at";

/// Provides data access for contact-form inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// List inquiries newest first, optionally restricted to one status.
    pub async fn list(pool: &PgPool, filter: &InquiryFilter) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inquiries
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(filter.status.map(InquiryStatus::as_str))
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an inquiry; a missing status is stored as `new`.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries
                (name, email, phone, message, property_id, property_name, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(input.property_id)
            .bind(&input.property_name)
            .bind(input.status.unwrap_or_default().as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: InquiryStatus,
    ) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("UPDATE inquiries SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
