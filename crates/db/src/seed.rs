//! Demo catalog loaded into an empty store at startup.

use estate_core::hotspots::{encode_hotspots, ExploreHotspot};
use estate_core::listing::{PROPERTY_TYPE_HOUSE, PROPERTY_TYPE_MULTIFAMILY};

use crate::models::image::CreateImage;
use crate::models::location::CreateLocation;
use crate::models::neighborhood::CreateNeighborhood;
use crate::models::property::CreateProperty;
use crate::models::property_unit::CreatePropertyUnit;
use crate::storage::{Storage, StorageError, StorageResult};

/// Row counts written by [`seed_demo_data`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub locations: usize,
    pub properties: usize,
    pub units: usize,
    pub images: usize,
}

struct DemoLocation {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    image: &'static str,
    neighborhood: &'static str,
    hotspots: &'static [(&'static str, &'static str)],
}

const DEMO_LOCATIONS: &[DemoLocation] = &[
    DemoLocation {
        slug: "downtown",
        name: "Downtown",
        description: "Walkable blocks close to transit, offices and nightlife.",
        image: "images/locations/downtown.jpg",
        neighborhood: "High-rise living a short walk from the financial district.",
        hotspots: &[("Central Market", "0.2 mi"), ("Union Station", "0.5 mi")],
    },
    DemoLocation {
        slug: "riverside",
        name: "Riverside",
        description: "Quiet residential streets along the river trail.",
        image: "images/locations/riverside.jpg",
        neighborhood: "Tree-lined streets, a riverfront park and family-run cafes.",
        hotspots: &[("River Trail", "0.1 mi"), ("Maple Elementary", "0.4 mi")],
    },
];

fn hotspots_for(location: &DemoLocation) -> Result<String, StorageError> {
    let hotspots: Vec<ExploreHotspot> = location
        .hotspots
        .iter()
        .map(|(name, distance)| ExploreHotspot {
            name: (*name).to_string(),
            description: None,
            distance: Some((*distance).to_string()),
            image_url: None,
            link: None,
        })
        .collect();
    Ok(encode_hotspots(&hotspots)?)
}

/// Write the demo catalog into `store`.
///
/// Expects an empty store; slugs that already exist surface as
/// [`StorageError::Conflict`].
pub async fn seed_demo_data(store: &dyn Storage) -> StorageResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for demo in DEMO_LOCATIONS {
        let location = store
            .create_location(&CreateLocation {
                slug: demo.slug.to_string(),
                name: demo.name.to_string(),
                description: Some(demo.description.to_string()),
                image_url: Some(demo.image.to_string()),
                link_text: Some(format!("View {} rentals", demo.name)),
            })
            .await?;
        summary.locations += 1;

        store
            .create_neighborhood(&CreateNeighborhood {
                location_id: location.id,
                description: Some(demo.neighborhood.to_string()),
                explore_description: Some(format!("Around {}", demo.name)),
                explore_hotspots: Some(hotspots_for(demo)?),
                ..CreateNeighborhood::default()
            })
            .await?;

        let house = store
            .create_property(&CreateProperty {
                location_id: location.id,
                title: format!("{} Family Home", demo.name),
                address: Some(format!("12 Main St, {}", demo.name)),
                description: Some("Three bedrooms with a fenced yard.".to_string()),
                bedrooms: 3,
                bathrooms: 2.0,
                square_feet: Some(1650),
                rent: 2800,
                available: Some(true),
                property_type: Some(PROPERTY_TYPE_HOUSE.to_string()),
                unit_count: None,
                image_url: Some(format!("images/properties/{}-home.jpg", demo.slug)),
            })
            .await?;
        summary.properties += 1;

        store
            .create_property_image(
                house.id,
                &CreateImage {
                    object_key: Some(format!("images/properties/{}-home.jpg", demo.slug)),
                    mime_type: Some("image/jpeg".to_string()),
                    caption: Some("Front elevation".to_string()),
                    is_featured: Some(true),
                    ..CreateImage::default()
                },
            )
            .await?;
        summary.images += 1;

        let building = store
            .create_property(&CreateProperty {
                location_id: location.id,
                title: format!("{} Flats", demo.name),
                address: Some(format!("400 River Rd, {}", demo.name)),
                description: Some("Renovated walk-up with two units.".to_string()),
                bedrooms: 2,
                bathrooms: 1.0,
                square_feet: Some(1800),
                rent: 1700,
                available: Some(true),
                property_type: Some(PROPERTY_TYPE_MULTIFAMILY.to_string()),
                unit_count: Some(2),
                image_url: None,
            })
            .await?;
        summary.properties += 1;

        for (number, rent, available) in [("1A", 1650, true), ("2A", 1750, false)] {
            store
                .create_unit(&CreatePropertyUnit {
                    property_id: building.id,
                    unit_number: number.to_string(),
                    bedrooms: 2,
                    bathrooms: 1.0,
                    square_feet: Some(900),
                    rent,
                    available: Some(available),
                    description: None,
                })
                .await?;
            summary.units += 1;
        }
    }

    tracing::info!(
        locations = summary.locations,
        properties = summary.properties,
        units = summary.units,
        images = summary.images,
        backend = store.backend_name(),
        "Seeded demo catalog",
    );
    Ok(summary)
}

/// Seed only when the store has no locations yet.
pub async fn seed_if_empty(store: &dyn Storage) -> StorageResult<Option<SeedSummary>> {
    if !store.list_locations().await?.is_empty() {
        tracing::debug!("Store already has locations, skipping demo seed");
        return Ok(None);
    }
    seed_demo_data(store).await.map(Some)
}
