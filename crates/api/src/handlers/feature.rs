//! Homepage feature list: available properties with their display image.

use axum::extract::State;
use axum::Json;
use estate_core::image_ref::{resolve_image_ref, ResolvedImage};
use estate_core::types::{DbId, ImageParent};
use estate_db::models::image::PropertyImage;
use estate_db::models::property::{Property, PropertyFilter};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProperty {
    #[serde(flatten)]
    pub property: Property,
    /// Image record backing `featuredImage`, if any.
    pub featured_image_id: Option<DbId>,
    pub featured_image: ResolvedImage,
}

/// The image a property is shown with.
///
/// The featured image wins, then the first by display order, then the
/// legacy `imageUrl` column. With none of those the placeholder is used.
pub fn pick_display_image(property: &Property, images: &[PropertyImage]) -> (Option<DbId>, ResolvedImage) {
    let chosen = images.iter().find(|i| i.is_featured).or_else(|| images.first());
    let reference = chosen
        .and_then(|i| i.object_key.as_deref().or(i.url.as_deref()))
        .or(property.image_url.as_deref());
    (
        chosen.map(|i| i.id),
        resolve_image_ref(reference, Some(ImageParent::Property)),
    )
}

/// GET /api/features
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FeaturedProperty>>>> {
    let filter = PropertyFilter {
        available: Some(true),
        ..PropertyFilter::default()
    };
    let properties = state.storage.list_properties(&filter).await?;

    let mut features = Vec::with_capacity(properties.len());
    for property in properties {
        let images = state.storage.list_property_images(property.id).await?;
        let (featured_image_id, featured_image) = pick_display_image(&property, &images);
        features.push(FeaturedProperty {
            property,
            featured_image_id,
            featured_image,
        });
    }
    Ok(Json(DataResponse { data: features }))
}
