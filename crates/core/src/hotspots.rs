//! Codec for the JSON-encoded `exploreHotspots` neighborhood column.
//!
//! The column stores a JSON array of `{name, description, distance, imageUrl,
//! link}` objects as text. Absent members stay absent when re-encoded.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One point of interest in a neighborhood's explore section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreHotspot {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Parse a stored hotspot column. `None` and blank text mean "no hotspots".
pub fn parse_hotspots(raw: Option<&str>) -> Result<Vec<ExploreHotspot>, CoreError> {
    match raw {
        Some(text) if !text.trim().is_empty() => serde_json::from_str(text).map_err(|e| {
            CoreError::Validation(format!("exploreHotspots must be a JSON array of hotspots: {e}"))
        }),
        _ => Ok(Vec::new()),
    }
}

/// Encode hotspots into the stored text form.
pub fn encode_hotspots(hotspots: &[ExploreHotspot]) -> Result<String, CoreError> {
    serde_json::to_string(hotspots)
        .map_err(|e| CoreError::Internal(format!("Failed to encode hotspots: {e}")))
}
