use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{media, upload};
use crate::state::AppState;

/// Image byte routes.
///
/// ```text
/// GET  /db-images/{key}     -> serve_db_image
/// POST /images/upload       -> upload_standalone
/// GET  /images/resolve      -> resolve
/// GET  /images/{*key}       -> serve_object
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/db-images/{key}", get(media::serve_db_image))
        .route("/images/upload", post(upload::upload_standalone))
        .route("/images/resolve", get(media::resolve))
        .route("/images/{*key}", get(media::serve_object))
}
