use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::{BlobError, BlobObject, BlobResult, BlobStore};

/// Process-local blob store. Each instance is independent.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, BlobObject>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> BlobResult<()> {
        self.objects.write().await.insert(
            key.to_string(),
            BlobObject {
                bytes,
                content_type: Some(content_type.to_string()),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> BlobResult<BlobObject> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| BlobError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> BlobResult<()> {
        self.objects.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn put_then_get_returns_bytes_and_type() {
        let store = MemoryBlobStore::new();
        store
            .put("images/a.png", Bytes::from_static(b"\x89PNG"), "image/png")
            .await
            .unwrap();

        let object = store.get("images/a.png").await.unwrap();
        assert_eq!(object.bytes, Bytes::from_static(b"\x89PNG"));
        assert_eq!(object.content_type.as_deref(), Some("image/png"));
    }

    #[tokio::test]
    async fn missing_key_is_not_found() {
        let store = MemoryBlobStore::new();
        assert_matches!(store.get("images/none.jpg").await, Err(BlobError::NotFound(k)) if k == "images/none.jpg");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryBlobStore::new();
        store
            .put("images/b.jpg", Bytes::from_static(b"x"), "image/jpeg")
            .await
            .unwrap();
        store.delete("images/b.jpg").await.unwrap();
        store.delete("images/b.jpg").await.unwrap();
        assert!(store.is_empty().await);
    }
}
