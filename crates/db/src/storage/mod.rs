//! The storage seam between HTTP handlers and persistence.
//!
//! [`Storage`] exposes CRUD per entity. Two implementations are provided and
//! must behave identically: [`MemStorage`] (explicitly constructed, used for
//! demos and tests) and [`PgStorage`] (Postgres via the repositories).
//!
//! Shared semantics:
//! - lists are ordered by id, except images (`display_order`, then id) and
//!   inquiries (newest first);
//! - updates are partial: `None` fields are left unchanged;
//! - an image written with `is_featured = true` clears the flag on every
//!   sibling under the same parent;
//! - deleting a parent removes its children, and deleting a property nulls
//!   `property_id` on inquiries that referenced it.

use async_trait::async_trait;
use estate_core::error::CoreError;
use estate_core::inquiry::InquiryStatus;
use estate_core::types::DbId;

use crate::models::image::{CreateImage, PropertyImage, UnitImage, UpdateImage};
use crate::models::image_storage::{ImageData, NewImageData};
use crate::models::inquiry::{CreateInquiry, Inquiry, InquiryFilter};
use crate::models::location::{CreateLocation, Location, UpdateLocation};
use crate::models::neighborhood::{CreateNeighborhood, Neighborhood, UpdateNeighborhood};
use crate::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};
use crate::models::property_unit::{CreatePropertyUnit, PropertyUnit, UpdatePropertyUnit};

mod memory;
mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

/// Errors surfaced by a [`Storage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A unique key (location slug, neighborhood location, object key) is taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// CRUD access to every catalog table.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Verify the backend is reachable.
    async fn ping(&self) -> StorageResult<()>;

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    async fn list_locations(&self) -> StorageResult<Vec<Location>>;
    async fn get_location(&self, id: DbId) -> StorageResult<Option<Location>>;
    async fn get_location_by_slug(&self, slug: &str) -> StorageResult<Option<Location>>;
    async fn create_location(&self, input: &CreateLocation) -> StorageResult<Location>;
    async fn update_location(
        &self,
        id: DbId,
        input: &UpdateLocation,
    ) -> StorageResult<Option<Location>>;
    async fn delete_location(&self, id: DbId) -> StorageResult<bool>;

    // -----------------------------------------------------------------------
    // Neighborhoods
    // -----------------------------------------------------------------------

    async fn list_neighborhoods(&self) -> StorageResult<Vec<Neighborhood>>;
    async fn get_neighborhood(&self, id: DbId) -> StorageResult<Option<Neighborhood>>;
    async fn get_neighborhood_by_location(
        &self,
        location_id: DbId,
    ) -> StorageResult<Option<Neighborhood>>;
    async fn create_neighborhood(&self, input: &CreateNeighborhood) -> StorageResult<Neighborhood>;
    async fn update_neighborhood(
        &self,
        id: DbId,
        input: &UpdateNeighborhood,
    ) -> StorageResult<Option<Neighborhood>>;
    async fn delete_neighborhood(&self, id: DbId) -> StorageResult<bool>;

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    async fn list_properties(&self, filter: &PropertyFilter) -> StorageResult<Vec<Property>>;
    async fn get_property(&self, id: DbId) -> StorageResult<Option<Property>>;
    async fn create_property(&self, input: &CreateProperty) -> StorageResult<Property>;
    async fn update_property(
        &self,
        id: DbId,
        input: &UpdateProperty,
    ) -> StorageResult<Option<Property>>;
    async fn delete_property(&self, id: DbId) -> StorageResult<bool>;

    // -----------------------------------------------------------------------
    // Property units
    // -----------------------------------------------------------------------

    async fn list_units(&self, property_id: DbId) -> StorageResult<Vec<PropertyUnit>>;
    async fn get_unit(&self, id: DbId) -> StorageResult<Option<PropertyUnit>>;
    async fn create_unit(&self, input: &CreatePropertyUnit) -> StorageResult<PropertyUnit>;
    async fn update_unit(
        &self,
        id: DbId,
        input: &UpdatePropertyUnit,
    ) -> StorageResult<Option<PropertyUnit>>;
    async fn delete_unit(&self, id: DbId) -> StorageResult<bool>;

    // -----------------------------------------------------------------------
    // Property images
    // -----------------------------------------------------------------------

    async fn list_property_images(&self, property_id: DbId) -> StorageResult<Vec<PropertyImage>>;
    async fn get_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>>;
    async fn create_property_image(
        &self,
        property_id: DbId,
        input: &CreateImage,
    ) -> StorageResult<PropertyImage>;
    async fn update_property_image(
        &self,
        id: DbId,
        input: &UpdateImage,
    ) -> StorageResult<Option<PropertyImage>>;
    /// Delete an image, returning the removed row so its bytes can be purged.
    async fn delete_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>>;
    /// Make `id` the only featured image of its property.
    async fn set_featured_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>>;

    // -----------------------------------------------------------------------
    // Unit images
    // -----------------------------------------------------------------------

    async fn list_unit_images(&self, unit_id: DbId) -> StorageResult<Vec<UnitImage>>;
    async fn get_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>>;
    async fn create_unit_image(
        &self,
        unit_id: DbId,
        input: &CreateImage,
    ) -> StorageResult<UnitImage>;
    async fn update_unit_image(
        &self,
        id: DbId,
        input: &UpdateImage,
    ) -> StorageResult<Option<UnitImage>>;
    async fn delete_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>>;
    async fn set_featured_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>>;

    // -----------------------------------------------------------------------
    // Inquiries
    // -----------------------------------------------------------------------

    async fn list_inquiries(&self, filter: &InquiryFilter) -> StorageResult<Vec<Inquiry>>;
    async fn get_inquiry(&self, id: DbId) -> StorageResult<Option<Inquiry>>;
    async fn create_inquiry(&self, input: &CreateInquiry) -> StorageResult<Inquiry>;
    async fn update_inquiry_status(
        &self,
        id: DbId,
        status: InquiryStatus,
    ) -> StorageResult<Option<Inquiry>>;
    async fn delete_inquiry(&self, id: DbId) -> StorageResult<bool>;

    // -----------------------------------------------------------------------
    // Database-resident image bytes
    // -----------------------------------------------------------------------

    async fn put_image_data(&self, input: &NewImageData) -> StorageResult<ImageData>;
    async fn get_image_data(&self, object_key: &str) -> StorageResult<Option<ImageData>>;
    async fn delete_image_data(&self, object_key: &str) -> StorageResult<bool>;
}

#[cfg(test)]
pub(crate) mod scenario;
