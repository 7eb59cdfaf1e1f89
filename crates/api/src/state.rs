use std::sync::Arc;

use estate_blob::BlobStore;
use estate_db::storage::Storage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Catalog persistence (Postgres or in-memory).
    pub storage: Arc<dyn Storage>,
    /// Object storage for uploaded image bytes.
    pub blobs: Arc<dyn BlobStore>,
    pub config: Arc<ServerConfig>,
}
