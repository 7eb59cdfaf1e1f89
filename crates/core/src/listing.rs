//! Listing vocabulary: property types and location slugs.

use crate::error::CoreError;

pub const PROPERTY_TYPE_APARTMENT: &str = "apartment";
pub const PROPERTY_TYPE_HOUSE: &str = "house";
pub const PROPERTY_TYPE_CONDO: &str = "condo";
pub const PROPERTY_TYPE_TOWNHOUSE: &str = "townhouse";
pub const PROPERTY_TYPE_MULTIFAMILY: &str = "multifamily";

/// Property type assigned when a create payload omits it.
pub const DEFAULT_PROPERTY_TYPE: &str = PROPERTY_TYPE_APARTMENT;

pub const VALID_PROPERTY_TYPES: &[&str] = &[
    PROPERTY_TYPE_APARTMENT,
    PROPERTY_TYPE_HOUSE,
    PROPERTY_TYPE_CONDO,
    PROPERTY_TYPE_TOWNHOUSE,
    PROPERTY_TYPE_MULTIFAMILY,
];

/// Validate a property type tag.
pub fn validate_property_type(property_type: &str) -> Result<(), CoreError> {
    if VALID_PROPERTY_TYPES.contains(&property_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid property type '{property_type}'. Must be one of: {VALID_PROPERTY_TYPES:?}"
        )))
    }
}

/// Validate that a unit count is only given for multifamily properties.
pub fn validate_unit_count(property_type: &str, unit_count: Option<i32>) -> Result<(), CoreError> {
    match unit_count {
        Some(_) if property_type != PROPERTY_TYPE_MULTIFAMILY => Err(CoreError::Validation(
            format!("unitCount is only allowed for '{PROPERTY_TYPE_MULTIFAMILY}' properties"),
        )),
        Some(n) if n < 1 => Err(CoreError::Validation("unitCount must be at least 1".into())),
        _ => Ok(()),
    }
}

/// Validate a location slug: non-empty, lowercase ASCII letters, digits and
/// single hyphens, not starting or ending with a hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits and hyphens"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_types() {
        assert!(validate_property_type("house").is_ok());
        assert!(validate_property_type("multifamily").is_ok());
        assert!(validate_property_type("castle").is_err());
        assert!(validate_property_type("House").is_err());
    }

    #[test]
    fn unit_count_requires_multifamily() {
        assert!(validate_unit_count("multifamily", Some(4)).is_ok());
        assert!(validate_unit_count("multifamily", None).is_ok());
        assert!(validate_unit_count("house", None).is_ok());
        assert!(validate_unit_count("house", Some(2)).is_err());
        assert!(validate_unit_count("multifamily", Some(0)).is_err());
    }

    #[test]
    fn slugs() {
        assert!(validate_slug("downtown").is_ok());
        assert!(validate_slug("north-end-2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("North").is_err());
        assert!(validate_slug("-edge").is_err());
        assert!(validate_slug("edge-").is_err());
        assert!(validate_slug("a--b").is_err());
        assert!(validate_slug("with space").is_err());
    }
}
