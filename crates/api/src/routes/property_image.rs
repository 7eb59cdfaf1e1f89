use axum::routing::{get, post};
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Routes mounted at `/property-images`.
///
/// `GET /{ref}` and `PUT`/`DELETE /{id}` share one path pattern; the GET
/// handler tells record ids from image keys.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(image::get_property_image)
                .put(image::update_property_image)
                .delete(image::delete_property_image),
        )
        .route("/{id}/featured", post(image::feature_property_image))
}
