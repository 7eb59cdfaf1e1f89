use axum::routing::get;
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// Routes mounted at `/locations`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /by-slug/{slug}         -> get_by_slug
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /{id}/properties        -> list_properties
/// GET    /{id}/neighborhood      -> get_neighborhood
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(location::list).post(location::create))
        .route("/by-slug/{slug}", get(location::get_by_slug))
        .route(
            "/{id}",
            get(location::get_by_id)
                .put(location::update)
                .delete(location::delete),
        )
        .route("/{id}/properties", get(location::list_properties))
        .route("/{id}/neighborhood", get(location::get_neighborhood))
}
