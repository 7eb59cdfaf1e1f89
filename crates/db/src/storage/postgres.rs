//! Postgres [`Storage`] backend, delegating to the per-table repositories.

use async_trait::async_trait;
use estate_core::inquiry::InquiryStatus;
use estate_core::types::DbId;

use super::{Storage, StorageError, StorageResult};
use crate::models::image::{CreateImage, PropertyImage, UnitImage, UpdateImage};
use crate::models::image_storage::{ImageData, NewImageData};
use crate::models::inquiry::{CreateInquiry, Inquiry, InquiryFilter};
use crate::models::location::{CreateLocation, Location, UpdateLocation};
use crate::models::neighborhood::{CreateNeighborhood, Neighborhood, UpdateNeighborhood};
use crate::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};
use crate::models::property_unit::{CreatePropertyUnit, PropertyUnit, UpdatePropertyUnit};
use crate::repositories::{
    ImageStorageRepo, InquiryRepo, LocationRepo, NeighborhoodRepo, PropertyImageRepo,
    PropertyRepo, PropertyUnitRepo, UnitImageRepo,
};
use crate::DbPool;

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Persistent storage over a shared connection pool.
#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: DbPool,
}

impl PgStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Translate unique violations on our `uq_` constraints into
/// [`StorageError::Conflict`], matching the memory backend.
fn map_unique(err: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let message = match db_err.constraint() {
                Some("uq_locations_slug") => "Location slug already exists".to_string(),
                Some("uq_neighborhoods_location_id") => {
                    "Location already has a neighborhood".to_string()
                }
                Some("uq_image_storage_object_key") => "Image key already exists".to_string(),
                Some(other) => format!("Duplicate value violates unique constraint: {other}"),
                None => "Duplicate value".to_string(),
            };
            return StorageError::Conflict(message);
        }
    }
    StorageError::Database(err)
}

#[async_trait]
impl Storage for PgStorage {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> StorageResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    async fn list_locations(&self) -> StorageResult<Vec<Location>> {
        Ok(LocationRepo::list(&self.pool).await?)
    }

    async fn get_location(&self, id: DbId) -> StorageResult<Option<Location>> {
        Ok(LocationRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_location_by_slug(&self, slug: &str) -> StorageResult<Option<Location>> {
        Ok(LocationRepo::find_by_slug(&self.pool, slug).await?)
    }

    async fn create_location(&self, input: &CreateLocation) -> StorageResult<Location> {
        LocationRepo::create(&self.pool, input)
            .await
            .map_err(map_unique)
    }

    async fn update_location(
        &self,
        id: DbId,
        input: &UpdateLocation,
    ) -> StorageResult<Option<Location>> {
        Ok(LocationRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_location(&self, id: DbId) -> StorageResult<bool> {
        Ok(LocationRepo::delete(&self.pool, id).await?)
    }

    // -----------------------------------------------------------------------
    // Neighborhoods
    // -----------------------------------------------------------------------

    async fn list_neighborhoods(&self) -> StorageResult<Vec<Neighborhood>> {
        Ok(NeighborhoodRepo::list(&self.pool).await?)
    }

    async fn get_neighborhood(&self, id: DbId) -> StorageResult<Option<Neighborhood>> {
        Ok(NeighborhoodRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_neighborhood_by_location(
        &self,
        location_id: DbId,
    ) -> StorageResult<Option<Neighborhood>> {
        Ok(NeighborhoodRepo::find_by_location(&self.pool, location_id).await?)
    }

    async fn create_neighborhood(&self, input: &CreateNeighborhood) -> StorageResult<Neighborhood> {
        NeighborhoodRepo::create(&self.pool, input)
            .await
            .map_err(map_unique)
    }

    async fn update_neighborhood(
        &self,
        id: DbId,
        input: &UpdateNeighborhood,
    ) -> StorageResult<Option<Neighborhood>> {
        Ok(NeighborhoodRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_neighborhood(&self, id: DbId) -> StorageResult<bool> {
        Ok(NeighborhoodRepo::delete(&self.pool, id).await?)
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    async fn list_properties(&self, filter: &PropertyFilter) -> StorageResult<Vec<Property>> {
        Ok(PropertyRepo::list(&self.pool, filter).await?)
    }

    async fn get_property(&self, id: DbId) -> StorageResult<Option<Property>> {
        Ok(PropertyRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_property(&self, input: &CreateProperty) -> StorageResult<Property> {
        Ok(PropertyRepo::create(&self.pool, input).await?)
    }

    async fn update_property(
        &self,
        id: DbId,
        input: &UpdateProperty,
    ) -> StorageResult<Option<Property>> {
        Ok(PropertyRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_property(&self, id: DbId) -> StorageResult<bool> {
        Ok(PropertyRepo::delete(&self.pool, id).await?)
    }

    // -----------------------------------------------------------------------
    // Property units
    // -----------------------------------------------------------------------

    async fn list_units(&self, property_id: DbId) -> StorageResult<Vec<PropertyUnit>> {
        Ok(PropertyUnitRepo::list_by_property(&self.pool, property_id).await?)
    }

    async fn get_unit(&self, id: DbId) -> StorageResult<Option<PropertyUnit>> {
        Ok(PropertyUnitRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_unit(&self, input: &CreatePropertyUnit) -> StorageResult<PropertyUnit> {
        Ok(PropertyUnitRepo::create(&self.pool, input).await?)
    }

    async fn update_unit(
        &self,
        id: DbId,
        input: &UpdatePropertyUnit,
    ) -> StorageResult<Option<PropertyUnit>> {
        Ok(PropertyUnitRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_unit(&self, id: DbId) -> StorageResult<bool> {
        Ok(PropertyUnitRepo::delete(&self.pool, id).await?)
    }

    // -----------------------------------------------------------------------
    // Property images
    // -----------------------------------------------------------------------

    async fn list_property_images(&self, property_id: DbId) -> StorageResult<Vec<PropertyImage>> {
        Ok(PropertyImageRepo::list_by_property(&self.pool, property_id).await?)
    }

    async fn get_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>> {
        Ok(PropertyImageRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_property_image(
        &self,
        property_id: DbId,
        input: &CreateImage,
    ) -> StorageResult<PropertyImage> {
        Ok(PropertyImageRepo::create(&self.pool, property_id, input).await?)
    }

    async fn update_property_image(
        &self,
        id: DbId,
        input: &UpdateImage,
    ) -> StorageResult<Option<PropertyImage>> {
        Ok(PropertyImageRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>> {
        Ok(PropertyImageRepo::delete(&self.pool, id).await?)
    }

    async fn set_featured_property_image(&self, id: DbId) -> StorageResult<Option<PropertyImage>> {
        Ok(PropertyImageRepo::set_featured(&self.pool, id).await?)
    }

    // -----------------------------------------------------------------------
    // Unit images
    // -----------------------------------------------------------------------

    async fn list_unit_images(&self, unit_id: DbId) -> StorageResult<Vec<UnitImage>> {
        Ok(UnitImageRepo::list_by_unit(&self.pool, unit_id).await?)
    }

    async fn get_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>> {
        Ok(UnitImageRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_unit_image(
        &self,
        unit_id: DbId,
        input: &CreateImage,
    ) -> StorageResult<UnitImage> {
        Ok(UnitImageRepo::create(&self.pool, unit_id, input).await?)
    }

    async fn update_unit_image(
        &self,
        id: DbId,
        input: &UpdateImage,
    ) -> StorageResult<Option<UnitImage>> {
        Ok(UnitImageRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>> {
        Ok(UnitImageRepo::delete(&self.pool, id).await?)
    }

    async fn set_featured_unit_image(&self, id: DbId) -> StorageResult<Option<UnitImage>> {
        Ok(UnitImageRepo::set_featured(&self.pool, id).await?)
    }

    // -----------------------------------------------------------------------
    // Inquiries
    // -----------------------------------------------------------------------

    async fn list_inquiries(&self, filter: &InquiryFilter) -> StorageResult<Vec<Inquiry>> {
        Ok(InquiryRepo::list(&self.pool, filter).await?)
    }

    async fn get_inquiry(&self, id: DbId) -> StorageResult<Option<Inquiry>> {
        Ok(InquiryRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_inquiry(&self, input: &CreateInquiry) -> StorageResult<Inquiry> {
        Ok(InquiryRepo::create(&self.pool, input).await?)
    }

    async fn update_inquiry_status(
        &self,
        id: DbId,
        status: InquiryStatus,
    ) -> StorageResult<Option<Inquiry>> {
        Ok(InquiryRepo::update_status(&self.pool, id, status).await?)
    }

    async fn delete_inquiry(&self, id: DbId) -> StorageResult<bool> {
        Ok(InquiryRepo::delete(&self.pool, id).await?)
    }

    // -----------------------------------------------------------------------
    // Database-resident image bytes
    // -----------------------------------------------------------------------

    async fn put_image_data(&self, input: &NewImageData) -> StorageResult<ImageData> {
        ImageStorageRepo::insert(&self.pool, input)
            .await
            .map_err(map_unique)
    }

    async fn get_image_data(&self, object_key: &str) -> StorageResult<Option<ImageData>> {
        Ok(ImageStorageRepo::find_by_key(&self.pool, object_key).await?)
    }

    async fn delete_image_data(&self, object_key: &str) -> StorageResult<bool> {
        Ok(ImageStorageRepo::delete_by_key(&self.pool, object_key).await?)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;
    use crate::storage::scenario;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn pg_storage_passes_shared_scenario(pool: PgPool) {
        scenario::run_all(&PgStorage::new(pool)).await;
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn duplicate_slug_maps_to_conflict(pool: PgPool) {
        let store = PgStorage::new(pool);
        store
            .create_location(&scenario::location_input("dupe"))
            .await
            .unwrap();
        let err = store
            .create_location(&scenario::location_input("dupe"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }
}
