use axum::routing::get;
use axum::Router;

use crate::handlers::neighborhood;
use crate::state::AppState;

/// Routes mounted at `/neighborhoods`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(neighborhood::list).post(neighborhood::create))
        .route(
            "/{id}",
            get(neighborhood::get_by_id)
                .put(neighborhood::update)
                .delete(neighborhood::delete),
        )
        .route("/{id}/hotspots", get(neighborhood::hotspots))
}
