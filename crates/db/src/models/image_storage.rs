//! Database-resident image bytes, keyed by object key.

use estate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `image_storage` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub id: DbId,
    pub object_key: String,
    pub mime_type: String,
    pub size: i64,
    #[serde(skip)]
    pub data: Vec<u8>,
    pub created_at: Timestamp,
}

/// Input for storing image bytes. Size is derived from `data`.
#[derive(Debug, Clone)]
pub struct NewImageData {
    pub object_key: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl NewImageData {
    pub fn size(&self) -> i64 {
        self.data.len() as i64
    }
}
