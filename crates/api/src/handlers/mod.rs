pub mod feature;
pub mod health;
pub mod image;
pub mod inquiry;
pub mod location;
pub mod media;
pub mod neighborhood;
pub mod property;
pub mod property_unit;
pub mod upload;
