use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{property_unit, upload};
use crate::state::AppState;

/// Routes mounted at `/property-units`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(property_unit::create))
        .route(
            "/{id}",
            get(property_unit::get_by_id)
                .put(property_unit::update)
                .delete(property_unit::delete),
        )
        .route(
            "/{id}/images",
            get(property_unit::list_images).post(property_unit::create_image),
        )
        .route("/{id}/images/upload", post(upload::upload_unit_image))
}
