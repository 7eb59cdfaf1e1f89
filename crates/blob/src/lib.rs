//! Object storage for uploaded image bytes.
//!
//! [`BlobStore`] is the seam the API writes through. [`S3BlobStore`] talks to
//! any S3-compatible service; [`MemoryBlobStore`] keeps bytes in process for
//! demos and tests.

use async_trait::async_trait;
use bytes::Bytes;

mod memory;
mod s3;

pub use memory::MemoryBlobStore;
pub use s3::{S3BlobStore, S3Settings};

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Object storage error: {0}")]
    Backend(String),
}

pub type BlobResult<T> = Result<T, BlobError>;

/// Bytes fetched from a store, with the content type recorded at upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobObject {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Store `bytes` under `key`, replacing any existing object.
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> BlobResult<()>;

    async fn get(&self, key: &str) -> BlobResult<BlobObject>;

    /// Remove `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> BlobResult<()>;
}
