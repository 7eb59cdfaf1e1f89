//! Behaviour checks shared by every [`Storage`] backend.

use estate_core::inquiry::InquiryStatus;

use super::{Storage, StorageError};
use crate::models::image::{CreateImage, UpdateImage};
use crate::models::image_storage::NewImageData;
use crate::models::inquiry::{CreateInquiry, InquiryFilter};
use crate::models::location::{CreateLocation, UpdateLocation};
use crate::models::neighborhood::CreateNeighborhood;
use crate::models::property::{CreateProperty, PropertyFilter, UpdateProperty};
use crate::models::property_unit::CreatePropertyUnit;

pub fn location_input(slug: &str) -> CreateLocation {
    CreateLocation {
        slug: slug.to_string(),
        name: format!("Location {slug}"),
        description: None,
        image_url: None,
        link_text: None,
    }
}

fn property_input(location_id: i64, title: &str) -> CreateProperty {
    CreateProperty {
        location_id,
        title: title.to_string(),
        address: None,
        description: None,
        bedrooms: 2,
        bathrooms: 1.5,
        square_feet: None,
        rent: 1800,
        available: None,
        property_type: None,
        unit_count: None,
        image_url: None,
    }
}

fn image_input(url: &str, featured: bool) -> CreateImage {
    CreateImage {
        url: Some(url.to_string()),
        is_featured: Some(featured),
        ..CreateImage::default()
    }
}

fn inquiry_input(property_id: Option<i64>) -> CreateInquiry {
    CreateInquiry {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        message: "Is it still available?".to_string(),
        property_id,
        property_name: None,
        status: None,
    }
}

/// Run every scenario against one fresh backend.
pub async fn run_all(store: &dyn Storage) {
    locations_round_trip(store).await;
    property_defaults_and_filters(store).await;
    featured_image_is_exclusive(store).await;
    delete_cascades(store).await;
    inquiries_default_and_filter(store).await;
    image_data_keys_are_unique(store).await;
}

async fn locations_round_trip(store: &dyn Storage) {
    let created = store
        .create_location(&location_input("boston"))
        .await
        .unwrap();
    assert_eq!(created.slug, "boston");

    let by_slug = store.get_location_by_slug("boston").await.unwrap().unwrap();
    assert_eq!(by_slug.id, created.id);

    let dupe = store.create_location(&location_input("boston")).await;
    assert!(matches!(dupe, Err(StorageError::Conflict(_))));

    let updated = store
        .update_location(
            created.id,
            &UpdateLocation {
                description: Some("Harbor city".to_string()),
                ..UpdateLocation::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description.as_deref(), Some("Harbor city"));

    assert!(store
        .update_location(i64::MAX, &UpdateLocation::default())
        .await
        .unwrap()
        .is_none());
    assert!(!store.delete_location(i64::MAX).await.unwrap());
}

async fn property_defaults_and_filters(store: &dyn Storage) {
    let location = store
        .create_location(&location_input("filters"))
        .await
        .unwrap();
    let other = store
        .create_location(&location_input("filters-other"))
        .await
        .unwrap();

    let house = store
        .create_property(&property_input(location.id, "House"))
        .await
        .unwrap();
    assert_eq!(house.property_type, "apartment");
    assert!(house.available);
    assert_eq!(house.square_feet, 0);

    let mut duplex = property_input(location.id, "Duplex");
    duplex.property_type = Some("multifamily".to_string());
    duplex.unit_count = Some(2);
    duplex.available = Some(false);
    let duplex = store.create_property(&duplex).await.unwrap();

    store
        .create_property(&property_input(other.id, "Elsewhere"))
        .await
        .unwrap();

    let here = store
        .list_properties(&PropertyFilter::for_location(location.id))
        .await
        .unwrap();
    assert_eq!(
        here.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![house.id, duplex.id]
    );

    let available = store
        .list_properties(&PropertyFilter {
            location_id: Some(location.id),
            available: Some(true),
            property_type: None,
        })
        .await
        .unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, house.id);

    let updated = store
        .update_property(
            house.id,
            &UpdateProperty {
                rent: Some(1950),
                ..UpdateProperty::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.rent, 1950);
    assert_eq!(updated.title, "House");
}

async fn featured_image_is_exclusive(store: &dyn Storage) {
    let location = store
        .create_location(&location_input("featured"))
        .await
        .unwrap();
    let property = store
        .create_property(&property_input(location.id, "Gallery"))
        .await
        .unwrap();

    let first = store
        .create_property_image(property.id, &image_input("https://img/1.jpg", true))
        .await
        .unwrap();
    assert_eq!(first.display_order, 0);
    let second = store
        .create_property_image(property.id, &image_input("https://img/2.jpg", true))
        .await
        .unwrap();
    assert_eq!(second.display_order, 1);

    let images = store.list_property_images(property.id).await.unwrap();
    let featured: Vec<_> = images.iter().filter(|i| i.is_featured).collect();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, second.id);

    store.set_featured_property_image(first.id).await.unwrap();
    let images = store.list_property_images(property.id).await.unwrap();
    let featured: Vec<_> = images.iter().filter(|i| i.is_featured).map(|i| i.id).collect();
    assert_eq!(featured, vec![first.id]);

    let caption_only = store
        .update_property_image(
            second.id,
            &UpdateImage {
                caption: Some("Kitchen".to_string()),
                ..UpdateImage::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(!caption_only.is_featured);
    assert_eq!(caption_only.caption.as_deref(), Some("Kitchen"));

    let unit = store
        .create_unit(&CreatePropertyUnit {
            property_id: property.id,
            unit_number: "1A".to_string(),
            bedrooms: 1,
            bathrooms: 1.0,
            square_feet: None,
            rent: 1200,
            available: None,
            description: None,
        })
        .await
        .unwrap();
    let a = store
        .create_unit_image(unit.id, &image_input("https://img/u1.jpg", true))
        .await
        .unwrap();
    let b = store
        .create_unit_image(unit.id, &image_input("https://img/u2.jpg", false))
        .await
        .unwrap();
    store
        .update_unit_image(
            b.id,
            &UpdateImage {
                is_featured: Some(true),
                ..UpdateImage::default()
            },
        )
        .await
        .unwrap();
    let unit_images = store.list_unit_images(unit.id).await.unwrap();
    let featured: Vec<_> = unit_images.iter().filter(|i| i.is_featured).map(|i| i.id).collect();
    assert_eq!(featured, vec![b.id]);
    assert!(unit_images.iter().any(|i| i.id == a.id && !i.is_featured));

    // Property images are untouched by unit featured changes.
    let images = store.list_property_images(property.id).await.unwrap();
    assert!(images.iter().any(|i| i.id == first.id && i.is_featured));
}

async fn delete_cascades(store: &dyn Storage) {
    let location = store
        .create_location(&location_input("cascade"))
        .await
        .unwrap();
    store
        .create_neighborhood(&CreateNeighborhood {
            location_id: location.id,
            description: Some("Quiet streets".to_string()),
            ..CreateNeighborhood::default()
        })
        .await
        .unwrap();
    let second_hood = store
        .create_neighborhood(&CreateNeighborhood {
            location_id: location.id,
            ..CreateNeighborhood::default()
        })
        .await;
    assert!(matches!(second_hood, Err(StorageError::Conflict(_))));

    let property = store
        .create_property(&property_input(location.id, "Doomed"))
        .await
        .unwrap();
    let unit = store
        .create_unit(&CreatePropertyUnit {
            property_id: property.id,
            unit_number: "2B".to_string(),
            bedrooms: 2,
            bathrooms: 1.0,
            square_feet: Some(800),
            rent: 1500,
            available: Some(true),
            description: None,
        })
        .await
        .unwrap();
    let image = store
        .create_property_image(property.id, &image_input("https://img/x.jpg", false))
        .await
        .unwrap();
    let inquiry = store
        .create_inquiry(&inquiry_input(Some(property.id)))
        .await
        .unwrap();

    assert!(store.delete_location(location.id).await.unwrap());

    assert!(store.get_property(property.id).await.unwrap().is_none());
    assert!(store.get_unit(unit.id).await.unwrap().is_none());
    assert!(store.get_property_image(image.id).await.unwrap().is_none());
    assert!(store
        .get_neighborhood_by_location(location.id)
        .await
        .unwrap()
        .is_none());

    let kept = store.get_inquiry(inquiry.id).await.unwrap().unwrap();
    assert_eq!(kept.property_id, None);
}

async fn inquiries_default_and_filter(store: &dyn Storage) {
    let first = store.create_inquiry(&inquiry_input(None)).await.unwrap();
    assert_eq!(first.status, "new");

    let second = store.create_inquiry(&inquiry_input(None)).await.unwrap();
    let contacted = store
        .update_inquiry_status(second.id, InquiryStatus::Contacted)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(contacted.status, "contacted");

    let only_contacted = store
        .list_inquiries(&InquiryFilter {
            status: Some(InquiryStatus::Contacted),
        })
        .await
        .unwrap();
    assert_eq!(
        only_contacted.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![second.id]
    );

    let all = store.list_inquiries(&InquiryFilter::default()).await.unwrap();
    let position = |id| all.iter().position(|i| i.id == id).unwrap();
    assert!(position(second.id) < position(first.id));

    assert!(store.delete_inquiry(first.id).await.unwrap());
    assert!(store.get_inquiry(first.id).await.unwrap().is_none());
}

async fn image_data_keys_are_unique(store: &dyn Storage) {
    let input = NewImageData {
        object_key: "properties/1/photo.jpg".to_string(),
        mime_type: "image/jpeg".to_string(),
        data: vec![0xFF, 0xD8, 0xFF],
    };
    let stored = store.put_image_data(&input).await.unwrap();
    assert_eq!(stored.size, 3);

    let again = store.put_image_data(&input).await;
    assert!(matches!(again, Err(StorageError::Conflict(_))));

    let fetched = store
        .get_image_data("properties/1/photo.jpg")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.data, vec![0xFF, 0xD8, 0xFF]);

    assert!(store.delete_image_data("properties/1/photo.jpg").await.unwrap());
    assert!(store
        .get_image_data("properties/1/photo.jpg")
        .await
        .unwrap()
        .is_none());
}
