pub mod feature;
pub mod health;
pub mod image;
pub mod inquiry;
pub mod location;
pub mod neighborhood;
pub mod property;
pub mod property_image;
pub mod property_unit;
pub mod unit_image;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /locations                                     list, create
/// /locations/by-slug/{slug}                      get by slug
/// /locations/{id}                                get, update, delete
/// /locations/{id}/properties                     properties in location
/// /locations/{id}/neighborhood                   neighborhood of location
///
/// /neighborhoods                                 list, create
/// /neighborhoods/{id}                            get, update, delete
/// /neighborhoods/{id}/hotspots                   parsed explore hotspots
///
/// /properties                                    list (filtered), create
/// /properties/{id}                               get, update, delete
/// /properties/{id}/units                         units of property
/// /properties/{id}/images                        list, attach
/// /properties/{id}/images/upload                 multipart upload
///
/// /property-units                                create
/// /property-units/{id}                           get, update, delete
/// /property-units/{id}/images                    list, attach
/// /property-units/{id}/images/upload             multipart upload
///
/// /property-images/{ref}                         record by id, or bytes by key
/// /property-images/{id}                          update, delete
/// /property-images/{id}/featured                 make featured (POST)
/// /unit-images/...                               same shape as property-images
///
/// /db-images/{key}                               bytes from image storage
/// /images/upload                                 standalone upload (POST)
/// /images/resolve                                resolve a reference
/// /images/{*key}                                 bytes from object storage
///
/// /features                                      available properties with display image
///
/// /inquiries                                     list, create
/// /inquiries/{id}                                get, delete
/// /inquiries/{id}/status                         change status (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/locations", location::router())
        .nest("/neighborhoods", neighborhood::router())
        .nest("/properties", property::router())
        .nest("/property-units", property_unit::router())
        .nest("/property-images", property_image::router())
        .nest("/unit-images", unit_image::router())
        .merge(image::router())
        .nest("/features", feature::router())
        .nest("/inquiries", inquiry::router())
}
