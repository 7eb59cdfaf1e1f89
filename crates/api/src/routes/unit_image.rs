use axum::routing::{get, post};
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Routes mounted at `/unit-images`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(image::get_unit_image)
                .put(image::update_unit_image)
                .delete(image::delete_unit_image),
        )
        .route("/{id}/featured", post(image::feature_unit_image))
}
