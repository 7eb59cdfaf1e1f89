//! Inquiry status lifecycle.
//!
//! Inquiries start as `new` and are moved by admin action to `contacted`
//! and `resolved`. Any other status string is a validation error.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Contacted,
    Resolved,
}

/// Valid status values, in lifecycle order.
pub const VALID_INQUIRY_STATUSES: &[&str] = &["new", "contacted", "resolved"];

impl InquiryStatus {
    /// Parse a status string, rejecting anything outside the enumerated set.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "resolved" => Ok(Self::Resolved),
            other => Err(CoreError::Validation(format!(
                "Invalid inquiry status '{other}'. Must be one of: {VALID_INQUIRY_STATUSES:?}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_new() {
        assert_eq!(InquiryStatus::default(), InquiryStatus::New);
    }

    #[test]
    fn parses_every_valid_status() {
        for name in VALID_INQUIRY_STATUSES {
            let status = InquiryStatus::parse(name).unwrap();
            assert_eq!(status.as_str(), *name);
        }
    }

    #[test]
    fn rejects_unsupported_status() {
        assert!(InquiryStatus::parse("archived").is_err());
        assert!(InquiryStatus::parse("New").is_err());
        assert!(InquiryStatus::parse("").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(InquiryStatus::Contacted).unwrap(),
            serde_json::json!("contacted")
        );
    }
}
