//! Domain primitives shared by the storage and HTTP crates.

pub mod content_type;
pub mod error;
pub mod hotspots;
pub mod image_ref;
pub mod inquiry;
pub mod listing;
pub mod types;
