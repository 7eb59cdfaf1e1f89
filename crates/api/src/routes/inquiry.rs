use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// Routes mounted at `/inquiries`.
///
/// ```text
/// GET    /?status=        -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// PATCH  /{id}/status     -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inquiry::list).post(inquiry::create))
        .route("/{id}", get(inquiry::get_by_id).delete(inquiry::delete))
        .route("/{id}/status", patch(inquiry::update_status))
}
