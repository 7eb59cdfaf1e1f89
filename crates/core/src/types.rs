use serde::{Deserialize, Serialize};

/// Primary keys are PostgreSQL BIGSERIAL; the memory store mirrors that.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The kind of record an image hangs off.
///
/// Doubles as the optional type hint for image-reference resolution and
/// as the namespace for freshly uploaded keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageParent {
    Property,
    Unit,
}

impl ImageParent {
    /// Parse the `type` query parameter used by the resolver endpoint.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint {
            "property" => Some(Self::Property),
            "unit" => Some(Self::Unit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Unit => "unit",
        }
    }
}
