//! Image-reference resolution.
//!
//! Image columns hold references in several shapes accumulated over time:
//! absolute URLs, legacy `/uploads/` paths, database-image routes, synthetic
//! database keys (`dbimg_`, `propimg_`, `unitimg_`) and raw object-storage
//! keys (`images/...`). [`resolve_image_ref`] turns any of them into a URL the
//! API serves, plus a tag naming where the bytes live.
//!
//! Prefix checks run most-specific-first so an already-resolved route is never
//! mistaken for a raw key and encoded twice.

use serde::Serialize;

use crate::types::ImageParent;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Placeholder returned for empty property image references.
pub const PROPERTY_PLACEHOLDER_URL: &str = "/placeholder-property.svg";

/// Placeholder returned for empty unit image references.
pub const UNIT_PLACEHOLDER_URL: &str = "/placeholder-unit.svg";

/// Route serving raw object-storage keys.
pub const OBJECT_STORAGE_ROUTE: &str = "/api/images/";

/// Route serving `dbimg_` keys from the image storage table.
pub const DB_IMAGE_ROUTE: &str = "/api/db-images/";

/// Route serving `propimg_` keys.
pub const PROPERTY_IMAGE_ROUTE: &str = "/api/property-images/";

/// Route serving `unitimg_` keys.
pub const UNIT_IMAGE_ROUTE: &str = "/api/unit-images/";

/// Static path prefix of the pre-object-storage upload directory.
pub const LEGACY_UPLOAD_PREFIX: &str = "/uploads/";

/// Prefix every object-storage key starts with.
pub const OBJECT_KEY_PREFIX: &str = "images/";

pub const DB_IMAGE_KEY_PREFIX: &str = "dbimg_";
pub const PROPERTY_IMAGE_KEY_PREFIX: &str = "propimg_";
pub const UNIT_IMAGE_KEY_PREFIX: &str = "unitimg_";

/// Synthetic key prefix, serving route and tag, in match order.
const SYNTHETIC_KEYS: [(&str, &str, ImageSource); 3] = [
    (DB_IMAGE_KEY_PREFIX, DB_IMAGE_ROUTE, ImageSource::DbImage),
    (PROPERTY_IMAGE_KEY_PREFIX, PROPERTY_IMAGE_ROUTE, ImageSource::PropertyImage),
    (UNIT_IMAGE_KEY_PREFIX, UNIT_IMAGE_ROUTE, ImageSource::UnitImage),
];

/// Path prefixes stripped by [`extract_filename`].
const STRIPPED_PREFIXES: [&str; 4] = [
    DB_IMAGE_ROUTE,
    PROPERTY_IMAGE_ROUTE,
    UNIT_IMAGE_ROUTE,
    LEGACY_UPLOAD_PREFIX,
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Where the bytes behind a resolved reference are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    Unknown,
    External,
    Legacy,
    DbImage,
    PropertyImage,
    UnitImage,
    ObjectStorage,
}

impl ImageSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::External => "external",
            Self::Legacy => "legacy",
            Self::DbImage => "db-image",
            Self::PropertyImage => "property-image",
            Self::UnitImage => "unit-image",
            Self::ObjectStorage => "object-storage",
        }
    }
}

/// A dereferenceable URL plus its source classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    pub url: String,
    pub source: ImageSource,
}

impl ResolvedImage {
    fn new(url: impl Into<String>, source: ImageSource) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a stored image reference to a URL the client can fetch.
///
/// Total over all inputs: unrecognised references pass through unchanged
/// as [`ImageSource::Unknown`]. The hint only picks which placeholder is
/// returned for an empty reference.
pub fn resolve_image_ref(reference: Option<&str>, hint: Option<ImageParent>) -> ResolvedImage {
    let reference = match reference {
        Some(r) if !r.trim().is_empty() => r,
        _ => return ResolvedImage::new(placeholder_url(hint), ImageSource::Unknown),
    };

    if reference.starts_with("http") {
        return ResolvedImage::new(reference, ImageSource::External);
    }

    if reference.starts_with(LEGACY_UPLOAD_PREFIX) {
        return ResolvedImage::new(reference, ImageSource::Legacy);
    }

    for (_, route, source) in SYNTHETIC_KEYS {
        if reference.starts_with(route) {
            return ResolvedImage::new(reference, source);
        }
    }

    for (prefix, route, source) in SYNTHETIC_KEYS {
        if reference.starts_with(prefix) {
            return ResolvedImage::new(format!("{route}{reference}"), source);
        }
    }

    if reference.starts_with(OBJECT_KEY_PREFIX) {
        return ResolvedImage::new(
            format!("{OBJECT_STORAGE_ROUTE}{}", encode_uri_component(reference)),
            ImageSource::ObjectStorage,
        );
    }

    ResolvedImage::new(reference, ImageSource::Unknown)
}

/// Shorthand for callers that only need the URL.
pub fn resolve_image_url(reference: Option<&str>, hint: Option<ImageParent>) -> String {
    resolve_image_ref(reference, hint).url
}

fn placeholder_url(hint: Option<ImageParent>) -> &'static str {
    match hint {
        Some(ImageParent::Unit) => UNIT_PLACEHOLDER_URL,
        _ => PROPERTY_PLACEHOLDER_URL,
    }
}

/// Percent-encode a URI component with the same unreserved set as
/// ECMAScript `encodeURIComponent`: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(input: &str) -> String {
    // urlencoding leaves only alphanumerics and `-_.~` bare.
    let encoded = urlencoding::encode(input);
    let mut out = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match (chars.next(), chars.next()) {
            (Some('2'), Some('1')) => out.push('!'),
            (Some('2'), Some('7')) => out.push('\''),
            (Some('2'), Some('8')) => out.push('('),
            (Some('2'), Some('9')) => out.push(')'),
            (Some('2'), Some('A')) => out.push('*'),
            (hi, lo) => {
                out.push('%');
                out.extend(hi);
                out.extend(lo);
            }
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Filename extraction
// ---------------------------------------------------------------------------

/// Extract a display filename from any image reference.
///
/// Strips a known route prefix (percent-decoding object-storage routes),
/// takes the last `/` segment and drops any query or fragment. The result
/// never contains `/`, `?` or `#`, so applying this twice is a no-op.
pub fn extract_filename(reference: &str) -> String {
    let decoded;
    let path = if let Some(rest) = reference.strip_prefix(OBJECT_STORAGE_ROUTE) {
        decoded = urlencoding::decode(rest)
            .map(|d| d.into_owned())
            .unwrap_or_else(|_| rest.to_string());
        decoded.as_str()
    } else {
        STRIPPED_PREFIXES
            .iter()
            .find_map(|prefix| reference.strip_prefix(prefix))
            .unwrap_or(reference)
    };

    let segment = path.rsplit('/').next().unwrap_or(path);
    let end = segment.find(['?', '#']).unwrap_or(segment.len());
    segment[..end].to_string()
}

/// Whether `reference` is a raw object-storage key (not a URL or route).
pub fn is_object_key(reference: &str) -> bool {
    reference.starts_with(OBJECT_KEY_PREFIX)
}

/// Whether `reference` is a synthetic database-image key.
pub fn is_database_key(reference: &str) -> bool {
    SYNTHETIC_KEYS
        .iter()
        .any(|(prefix, _, _)| reference.starts_with(prefix))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
