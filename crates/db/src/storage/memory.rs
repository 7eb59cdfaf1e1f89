//! In-memory [`Storage`] backend.
//!
//! Each table is a `BTreeMap` keyed by an auto-incrementing id, so iteration
//! order matches the Postgres `ORDER BY id`. All tables sit behind one
//! `RwLock`: multi-row writes (featured fixups, cascades) happen under a
//! single write guard.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use estate_core::inquiry::InquiryStatus;
use estate_core::listing::DEFAULT_PROPERTY_TYPE;
use estate_core::types::DbId;
use tokio::sync::RwLock;

use super::{Storage, StorageError, StorageResult};
use crate::models::image::{CreateImage, PropertyImage, UnitImage, UpdateImage};
use crate::models::image_storage::{ImageData, NewImageData};
use crate::models::inquiry::{CreateInquiry, Inquiry, InquiryFilter};
use crate::models::location::{CreateLocation, Location, UpdateLocation};
use crate::models::neighborhood::{CreateNeighborhood, Neighborhood, UpdateNeighborhood};
use crate::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};
use crate::models::property_unit::{CreatePropertyUnit, PropertyUnit, UpdatePropertyUnit};

/// One table: rows by id plus the next id to hand out.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    next_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn allocate_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn insert(&mut self, id: DbId, row: T) -> T {
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn filtered(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| predicate(r)).cloned().collect()
    }

    fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let ids: Vec<DbId> = self
            .rows
            .iter()
            .filter(|(_, row)| predicate(row))
            .map(|(id, _)| *id)
            .collect();
        ids.into_iter().filter_map(|id| self.rows.remove(&id)).collect()
    }
}

#[derive(Debug, Default)]
struct Tables {
    locations: Table<Location>,
    neighborhoods: Table<Neighborhood>,
    properties: Table<Property>,
    units: Table<PropertyUnit>,
    property_images: Table<PropertyImage>,
    unit_images: Table<UnitImage>,
    inquiries: Table<Inquiry>,
    image_data: Table<ImageData>,
}

impl Tables {
    fn remove_unit_cascade(&mut self, unit_id: DbId) -> bool {
        self.unit_images.remove_where(|img| img.unit_id == unit_id);
        self.units.rows.remove(&unit_id).is_some()
    }

    fn remove_property_cascade(&mut self, property_id: DbId) -> bool {
        let unit_ids: Vec<DbId> = self
            .units
            .filtered(|u| u.property_id == property_id)
            .iter()
            .map(|u| u.id)
            .collect();
        for unit_id in unit_ids {
            self.remove_unit_cascade(unit_id);
        }
        self.property_images
            .remove_where(|img| img.property_id == property_id);
        for inquiry in self.inquiries.rows.values_mut() {
            if inquiry.property_id == Some(property_id) {
                inquiry.property_id = None;
            }
        }
        self.properties.rows.remove(&property_id).is_some()
    }

    fn remove_location_cascade(&mut self, location_id: DbId) -> bool {
        self.neighborhoods
            .remove_where(|n| n.location_id == location_id);
        let property_ids: Vec<DbId> = self
            .properties
            .filtered(|p| p.location_id == location_id)
            .iter()
            .map(|p| p.id)
            .collect();
        for property_id in property_ids {
            self.remove_property_cascade(property_id);
        }
        self.locations.rows.remove(&location_id).is_some()
    }
}

/// Position after the last image under one parent.
fn next_display_order<'a>(orders: impl Iterator<Item = &'a i32>) -> i32 {
    orders.max().map_or(0, |max| max.saturating_add(1))
}

fn sort_by_display_order<T>(rows: &mut [T], key: impl Fn(&T) -> (i32, DbId)) {
    rows.sort_by_key(|r| key(r));
}

/// Transient storage backed by process memory. Construct one per app (or
/// per test) and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    async fn list_locations(&self) -> StorageResult<Vec<Location>> {
        Ok(self.tables.read().await.locations.filtered(|_| true))
    }

    async fn get_location(&self, id: DbId) -> StorageResult<Option<Location>> {
        Ok(self.tables.read().await.locations.get(id))
    }

    async fn get_location_by_slug(&self, slug: &str) -> StorageResult<Option<Location>> {
        let tables = self.tables.read().await;
        Ok(tables.locations.rows.values().find(|l| l.slug == slug).cloned())
    }

    async fn create_location(&self, input: &CreateLocation) -> StorageResult<Location> {
        let mut tables = self.tables.write().await;
        if tables.locations.rows.values().any(|l| l.slug == input.slug) {
            return Err(StorageError::Conflict(format!(
                "Location slug '{}' already exists",
                input.slug
            )));
        }
        let now = Utc::now();
        let id = tables.locations.allocate_id();
        Ok(tables.locations.insert(
            id,
            Location {
                id,
                slug: input.slug.clone(),
                name: input.name.clone(),
                description: input.description.clone(),
                image_url: input.image_url.clone(),
                link_text: input.link_text.clone(),
                created_at: now,
                updated_at: now,
            },
        ))
    }

    async fn update_location(
        &self,
        id: DbId,
        input: &UpdateLocation,
    ) -> StorageResult<Option<Location>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.locations.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = &input.name {
            row.name = v.clone();
        }
        if let Some(v) = &input.description {
            row.description = Some(v.clone());
        }
        if let Some(v) = &input.image_url {
            row.image_url = Some(v.clone());
        }
        if let Some(v) = &input.link_text {
            row.link_text = Some(v.clone());
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_location(&self, id: DbId) -> StorageResult<bool> {
        Ok(self.tables.write().await.remove_location_cascade(id))
    }

    // -----------------------------------------------------------------------
    // Neighborhoods
    // -----------------------------------------------------------------------

    async fn list_neighborhoods(&self) -> StorageResult<Vec<Neighborhood>> {
        Ok(self.tables.read().await.neighborhoods.filtered(|_| true))
    }

    async fn get_neighborhood(&self, id: DbId) -> StorageResult<Option<Neighborhood>> {
        Ok(self.tables.read().await.neighborhoods.get(id))
    }

    async fn get_neighborhood_by_location(
        &self,
        location_id: DbId,
    ) -> StorageResult<Option<Neighborhood>> {
        let tables = self.tables.read().await;
        Ok(tables
            .neighborhoods
            .rows
            .values()
            .find(|n| n.location_id == location_id)
            .cloned())
    }

    async fn create_neighborhood(&self, input: &CreateNeighborhood) -> StorageResult<Neighborhood> {
        let mut tables = self.tables.write().await;
        if tables
            .neighborhoods
            .rows
            .values()
            .any(|n| n.location_id == input.location_id)
        {
            return Err(StorageError::Conflict(format!(
                "Location {} already has a neighborhood",
                input.location_id
            )));
        }
        let now = Utc::now();
        let id = tables.neighborhoods.allocate_id();
        Ok(tables.neighborhoods.insert(
            id,
            Neighborhood {
                id,
                location_id: input.location_id,
                description: input.description.clone(),
                highlights: input.highlights.clone(),
                attractions: input.attractions.clone(),
                transportation: input.transportation.clone(),
                dining: input.dining.clone(),
                schools: input.schools.clone(),
                parks: input.parks.clone(),
                history: input.history.clone(),
                explore_description: input.explore_description.clone(),
                explore_map_url: input.explore_map_url.clone(),
                explore_hotspots: input.explore_hotspots.clone(),
                created_at: now,
                updated_at: now,
            },
        ))
    }

    async fn update_neighborhood(
        &self,
        id: DbId,
        input: &UpdateNeighborhood,
    ) -> StorageResult<Option<Neighborhood>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.neighborhoods.rows.get_mut(&id) else {
            return Ok(None);
        };
        let fields = [
            (&mut row.description, &input.description),
            (&mut row.highlights, &input.highlights),
            (&mut row.attractions, &input.attractions),
            (&mut row.transportation, &input.transportation),
            (&mut row.dining, &input.dining),
            (&mut row.schools, &input.schools),
            (&mut row.parks, &input.parks),
            (&mut row.history, &input.history),
            (&mut row.explore_description, &input.explore_description),
            (&mut row.explore_map_url, &input.explore_map_url),
            (&mut row.explore_hotspots, &input.explore_hotspots),
        ];
        for (slot, value) in fields {
            if value.is_some() {
                slot.clone_from(value);
            }
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_neighborhood(&self, id: DbId) -> StorageResult<bool> {
        Ok(self.tables.write().await.neighborhoods.rows.remove(&id).is_some())
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    async fn list_properties(&self, filter: &PropertyFilter) -> StorageResult<Vec<Property>> {
        Ok(self.tables.read().await.properties.filtered(|p| filter.matches(p)))
    }

    async fn get_property(&self, id: DbId) -> StorageResult<Option<Property>> {
        Ok(self.tables.read().await.properties.get(id))
    }

    async fn create_property(&self, input: &CreateProperty) -> StorageResult<Property> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let id = tables.properties.allocate_id();
        Ok(tables.properties.insert(
            id,
            Property {
                id,
                location_id: input.location_id,
                title: input.title.clone(),
                address: input.address.clone(),
                description: input.description.clone(),
                bedrooms: input.bedrooms,
                bathrooms: input.bathrooms,
                square_feet: input.square_feet.unwrap_or(0),
                rent: input.rent,
                available: input.available.unwrap_or(true),
                property_type: input
                    .property_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PROPERTY_TYPE.to_string()),
                unit_count: input.unit_count,
                image_url: input.image_url.clone(),
                created_at: now,
                updated_at: now,
            },
        ))
    }

    async fn update_property(
        &self,
        id: DbId,
        input: &UpdateProperty,
    ) -> StorageResult<Option<Property>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.properties.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = input.location_id {
            row.location_id = v;
        }
        if let Some(v) = &input.title {
            row.title = v.clone();
        }
        if let Some(v) = &input.address {
            row.address = Some(v.clone());
        }
        if let Some(v) = &input.description {
            row.description = Some(v.clone());
        }
        if let Some(v) = input.bedrooms {
            row.bedrooms = v;
        }
        if let Some(v) = input.bathrooms {
            row.bathrooms = v;
        }
        if let Some(v) = input.square_feet {
            row.square_feet = v;
        }
        if let Some(v) = input.rent {
            row.rent = v;
        }
        if let Some(v) = input.available {
            row.available = v;
        }
        if let Some(v) = &input.property_type {
            row.property_type = v.clone();
        }
        if let Some(v) = input.unit_count {
            row.unit_count = Some(v);
        }
        if let Some(v) = &input.image_url {
            row.image_url = Some(v.clone());
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_property(&self, id: DbId) -> StorageResult<bool> {
        Ok(self.tables.write().await.remove_property_cascade(id))
    }

    // -----------------------------------------------------------------------
    // Property units
    // -----------------------------------------------------------------------

    async fn list_units(&self, property_id: DbId) -> StorageResult<Vec<PropertyUnit>> {
        Ok(self
            .tables
            .read()
            .await
            .units
            .filtered(|u| u.property_id == property_id))
    }

    async fn get_unit(&self, id: DbId) -> StorageResult<Option<PropertyUnit>> {
        Ok(self.tables.read().await.units.get(id))
    }

    async fn create_unit(&self, input: &CreatePropertyUnit) -> StorageResult<PropertyUnit> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let id = tables.units.allocate_id();
        Ok(tables.units.insert(
            id,
            PropertyUnit {
                id,
                property_id: input.property_id,
                unit_number: input.unit_number.clone(),
                bedrooms: input.bedrooms,
                bathrooms: input.bathrooms,
                square_feet: input.square_feet,
                rent: input.rent,
                available: input.available.unwrap_or(true),
                description: input.description.clone(),
                created_at: now,
                updated_at: now,
            },
        ))
    }

    async fn update_unit(
        &self,
        id: DbId,
        input: &UpdatePropertyUnit,
    ) -> StorageResult<Option<PropertyUnit>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.units.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = &input.unit_number {
            row.unit_number = v.clone();
        }
        if let Some(v) = input.bedrooms {
            row.bedrooms = v;
        }
        if let Some(v) = input.bathrooms {
            row.bathrooms = v;
        }
        if let Some(v) = input.square_feet {
            row.square_feet = Some(v);
        }
        if let Some(v) = input.rent {
            row.rent = v;
        }
        if let Some(v) = input.available {
            row.available = v;
        }
        if let Some(v) = &input.description {
            row.description = Some(v.clone());
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_unit(&self, id: DbId) -> StorageResult<bool> {
        Ok(self.tables.write().await.remove_unit_cascade(id))
    }

    // -----------------------------------------------------------------------
    // Property images
    // -----------------------------------------------------------------------

    async fn list_property_images(&self, property_id: DbId) -> StorageResult<Vec<PropertyImage>> {
        let mut images = self
            .tables
            .read()
            .await
            .property_images
            .filtered(|img| img.property_id == property_id);
        sort_by_display_order(&mut images, |img| (img.display_order, img.id));
        Ok(images)
    }

    async fn get_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>> {
        Ok(self.tables.read().await.property_images.get(id))
    }

    async fn create_property_image(
        &self,
        property_id: DbId,
        input: &CreateImage,
    ) -> StorageResult<PropertyImage> {
        let mut tables = self.tables.write().await;
        let siblings = tables
            .property_images
            .rows
            .values_mut()
            .filter(|img| img.property_id == property_id);
        let is_featured = input.is_featured.unwrap_or(false);
        let mut orders = Vec::new();
        for sibling in siblings {
            if is_featured {
                sibling.is_featured = false;
            }
            orders.push(sibling.display_order);
        }
        let id = tables.property_images.allocate_id();
        Ok(tables.property_images.insert(
            id,
            PropertyImage {
                id,
                property_id,
                url: input.url.clone(),
                object_key: input.object_key.clone(),
                mime_type: input.mime_type.clone(),
                size: input.size,
                caption: input.caption.clone(),
                display_order: input
                    .display_order
                    .unwrap_or_else(|| next_display_order(orders.iter())),
                is_featured,
                created_at: Utc::now(),
            },
        ))
    }

    async fn update_property_image(
        &self,
        id: DbId,
        input: &UpdateImage,
    ) -> StorageResult<Option<PropertyImage>> {
        let mut tables = self.tables.write().await;
        let Some(property_id) = tables.property_images.rows.get(&id).map(|i| i.property_id) else {
            return Ok(None);
        };
        if input.is_featured == Some(true) {
            for img in tables.property_images.rows.values_mut() {
                if img.property_id == property_id && img.id != id {
                    img.is_featured = false;
                }
            }
        }
        let Some(row) = tables.property_images.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = &input.url {
            row.url = Some(v.clone());
        }
        if let Some(v) = &input.caption {
            row.caption = Some(v.clone());
        }
        if let Some(v) = input.display_order {
            row.display_order = v;
        }
        if let Some(v) = input.is_featured {
            row.is_featured = v;
        }
        Ok(Some(row.clone()))
    }

    async fn delete_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>> {
        Ok(self.tables.write().await.property_images.rows.remove(&id))
    }

    async fn set_featured_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>> {
        self.update_property_image(
            id,
            &UpdateImage {
                is_featured: Some(true),
                ..UpdateImage::default()
            },
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Unit images
    // -----------------------------------------------------------------------

    async fn list_unit_images(&self, unit_id: DbId) -> StorageResult<Vec<UnitImage>> {
        let mut images = self
            .tables
            .read()
            .await
            .unit_images
            .filtered(|img| img.unit_id == unit_id);
        sort_by_display_order(&mut images, |img| (img.display_order, img.id));
        Ok(images)
    }

    async fn get_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>> {
        Ok(self.tables.read().await.unit_images.get(id))
    }

    async fn create_unit_image(
        &self,
        unit_id: DbId,
        input: &CreateImage,
    ) -> StorageResult<UnitImage> {
        let mut tables = self.tables.write().await;
        let is_featured = input.is_featured.unwrap_or(false);
        let mut orders = Vec::new();
        for sibling in tables
            .unit_images
            .rows
            .values_mut()
            .filter(|img| img.unit_id == unit_id)
        {
            if is_featured {
                sibling.is_featured = false;
            }
            orders.push(sibling.display_order);
        }
        let id = tables.unit_images.allocate_id();
        Ok(tables.unit_images.insert(
            id,
            UnitImage {
                id,
                unit_id,
                url: input.url.clone(),
                object_key: input.object_key.clone(),
                mime_type: input.mime_type.clone(),
                size: input.size,
                caption: input.caption.clone(),
                display_order: input
                    .display_order
                    .unwrap_or_else(|| next_display_order(orders.iter())),
                is_featured,
                created_at: Utc::now(),
            },
        ))
    }

    async fn update_unit_image(
        &self,
        id: DbId,
        input: &UpdateImage,
    ) -> StorageResult<Option<UnitImage>> {
        let mut tables = self.tables.write().await;
        let Some(unit_id) = tables.unit_images.rows.get(&id).map(|i| i.unit_id) else {
            return Ok(None);
        };
        if input.is_featured == Some(true) {
            for img in tables.unit_images.rows.values_mut() {
                if img.unit_id == unit_id && img.id != id {
                    img.is_featured = false;
                }
            }
        }
        let Some(row) = tables.unit_images.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = &input.url {
            row.url = Some(v.clone());
        }
        if let Some(v) = &input.caption {
            row.caption = Some(v.clone());
        }
        if let Some(v) = input.display_order {
            row.display_order = v;
        }
        if let Some(v) = input.is_featured {
            row.is_featured = v;
        }
        Ok(Some(row.clone()))
    }

    async fn delete_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>> {
        Ok(self.tables.write().await.unit_images.rows.remove(&id))
    }

    async fn set_featured_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>> {
        self.update_unit_image(
            id,
            &UpdateImage {
                is_featured: Some(true),
                ..UpdateImage::default()
            },
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Inquiries
    // -----------------------------------------------------------------------

    async fn list_inquiries(&self, filter: &InquiryFilter) -> StorageResult<Vec<Inquiry>> {
        let status = filter.status.map(InquiryStatus::as_str);
        let mut inquiries = self
            .tables
            .read()
            .await
            .inquiries
            .filtered(|i| status.is_none_or(|s| i.status == s));
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(inquiries)
    }

    async fn get_inquiry(&self, id: DbId) -> StorageResult<Option<Inquiry>> {
        Ok(self.tables.read().await.inquiries.get(id))
    }

    async fn create_inquiry(&self, input: &CreateInquiry) -> StorageResult<Inquiry> {
        let mut tables = self.tables.write().await;
        let id = tables.inquiries.allocate_id();
        Ok(tables.inquiries.insert(
            id,
            Inquiry {
                id,
                name: input.name.clone(),
                email: input.email.clone(),
                phone: input.phone.clone(),
                message: input.message.clone(),
                property_id: input.property_id,
                property_name: input.property_name.clone(),
                status: input.status.unwrap_or_default().as_str().to_string(),
                created_at: Utc::now(),
            },
        ))
    }

    async fn update_inquiry_status(
        &self,
        id: DbId,
        status: InquiryStatus,
    ) -> StorageResult<Option<Inquiry>> {
        let mut tables = self.tables.write().await;
        Ok(tables.inquiries.rows.get_mut(&id).map(|row| {
            row.status = status.as_str().to_string();
            row.clone()
        }))
    }

    async fn delete_inquiry(&self, id: DbId) -> StorageResult<bool> {
        Ok(self.tables.write().await.inquiries.rows.remove(&id).is_some())
    }

    // -----------------------------------------------------------------------
    // Database-resident image bytes
    // -----------------------------------------------------------------------

    async fn put_image_data(&self, input: &NewImageData) -> StorageResult<ImageData> {
        let mut tables = self.tables.write().await;
        if tables
            .image_data
            .rows
            .values()
            .any(|d| d.object_key == input.object_key)
        {
            return Err(StorageError::Conflict(format!(
                "Image key '{}' already exists",
                input.object_key
            )));
        }
        let id = tables.image_data.allocate_id();
        Ok(tables.image_data.insert(
            id,
            ImageData {
                id,
                object_key: input.object_key.clone(),
                mime_type: input.mime_type.clone(),
                size: input.size(),
                data: input.data.clone(),
                created_at: Utc::now(),
            },
        ))
    }

    async fn get_image_data(&self, object_key: &str) -> StorageResult<Option<ImageData>> {
        let tables = self.tables.read().await;
        Ok(tables
            .image_data
            .rows
            .values()
            .find(|d| d.object_key == object_key)
            .cloned())
    }

    async fn delete_image_data(&self, object_key: &str) -> StorageResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(!tables
            .image_data
            .remove_where(|d| d.object_key == object_key)
            .is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::scenario;

    #[tokio::test]
    async fn memory_storage_passes_shared_scenario() {
        scenario::run_all(&MemStorage::new()).await;
    }

    #[test]
    fn next_display_order_saturates_at_max() {
        assert_eq!(next_display_order(std::iter::empty()), 0);
        assert_eq!(next_display_order([0, 4, 2].iter()), 5);
        assert_eq!(next_display_order([i32::MAX].iter()), i32::MAX);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemStorage::new();
        let first = store
            .create_location(&scenario::location_input("first"))
            .await
            .unwrap();
        assert!(store.delete_location(first.id).await.unwrap());
        let second = store
            .create_location(&scenario::location_input("second"))
            .await
            .unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn separate_instances_do_not_share_rows() {
        let a = MemStorage::new();
        let b = MemStorage::new();
        a.create_location(&scenario::location_input("only-a"))
            .await
            .unwrap();
        assert!(b.list_locations().await.unwrap().is_empty());
    }
}
