//! Postgres repositories, one per table.
//!
//! Each repository is a zero-sized struct with associated async functions
//! taking a `&PgPool`, returning `sqlx::Error` unchanged.

mod image_storage_repo;
mod inquiry_repo;
mod location_repo;
mod neighborhood_repo;
mod property_image_repo;
mod property_repo;
mod property_unit_repo;
mod unit_image_repo;

pub use image_storage_repo::ImageStorageRepo;
pub use inquiry_repo::InquiryRepo;
pub use location_repo::LocationRepo;
pub use neighborhood_repo::NeighborhoodRepo;
pub use property_image_repo::PropertyImageRepo;
pub use property_repo::PropertyRepo;
pub use property_unit_repo::PropertyUnitRepo;
pub use unit_image_repo::UnitImageRepo;
