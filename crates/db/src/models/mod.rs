pub mod image;
pub mod image_storage;
pub mod inquiry;
pub mod location;
pub mod neighborhood;
pub mod property;
pub mod property_unit;
