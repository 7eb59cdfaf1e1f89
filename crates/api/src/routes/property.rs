use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{property, upload};
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET    /?locationId=&available=&propertyType=  -> list
/// POST   /                                       -> create
/// GET    /{id}                                   -> get_by_id
/// PUT    /{id}                                   -> update
/// DELETE /{id}                                   -> delete
/// GET    /{id}/units                             -> list_units
/// GET    /{id}/images                            -> list_images
/// POST   /{id}/images                            -> create_image
/// POST   /{id}/images/upload                     -> upload_property_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(property::list).post(property::create))
        .route(
            "/{id}",
            get(property::get_by_id)
                .put(property::update)
                .delete(property::delete),
        )
        .route("/{id}/units", get(property::list_units))
        .route(
            "/{id}/images",
            get(property::list_images).post(property::create_image),
        )
        .route("/{id}/images/upload", post(upload::upload_property_image))
}
