use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

use crate::{BlobError, BlobObject, BlobResult, BlobStore};

/// Connection settings for an S3-compatible bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Settings {
    pub bucket: String,
    /// Custom endpoint (MinIO, R2, ...). Enables path-style addressing.
    pub endpoint: Option<String>,
}

/// Blob store backed by an S3 bucket.
///
/// Credentials and region come from the standard AWS environment chain.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    pub async fn connect(settings: &S3Settings) -> Self {
        let shared = aws_config::load_from_env().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &settings.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        tracing::info!(
            bucket = %settings.bucket,
            endpoint = settings.endpoint.as_deref().unwrap_or("aws"),
            "Object storage client configured",
        );
        Self {
            client: Client::from_conf(builder.build()),
            bucket: settings.bucket.clone(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

fn backend_error(err: impl std::error::Error) -> BlobError {
    BlobError::Backend(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn backend_name(&self) -> &'static str {
        "s3"
    }

    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> BlobResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(backend_error)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> BlobResult<BlobObject> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                if err.as_service_error().is_some_and(|e| e.is_no_such_key()) {
                    BlobError::NotFound(key.to_string())
                } else {
                    backend_error(err)
                }
            })?;

        let content_type = output.content_type().map(str::to_string);
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| BlobError::Backend(e.to_string()))?
            .into_bytes();

        Ok(BlobObject {
            bytes,
            content_type,
        })
    }

    async fn delete(&self, key: &str) -> BlobResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(backend_error)?;
        Ok(())
    }
}
