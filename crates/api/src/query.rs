//! Shared query parameter types for API handlers.

use estate_core::inquiry::InquiryStatus;
use estate_core::listing::validate_property_type;
use estate_core::types::{DbId, ImageParent};
use estate_db::models::inquiry::InquiryFilter;
use estate_db::models::property::PropertyFilter;
use serde::Deserialize;

use crate::error::AppResult;

/// `GET /api/properties?locationId=&available=&propertyType=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListParams {
    pub location_id: Option<DbId>,
    pub available: Option<bool>,
    pub property_type: Option<String>,
}

impl PropertyListParams {
    pub fn into_filter(self) -> AppResult<PropertyFilter> {
        if let Some(property_type) = &self.property_type {
            validate_property_type(property_type)?;
        }
        Ok(PropertyFilter {
            location_id: self.location_id,
            available: self.available,
            property_type: self.property_type,
        })
    }
}

/// `GET /api/inquiries?status=`
#[derive(Debug, Default, Deserialize)]
pub struct InquiryListParams {
    pub status: Option<String>,
}

impl InquiryListParams {
    pub fn into_filter(self) -> AppResult<InquiryFilter> {
        let status = self
            .status
            .as_deref()
            .map(InquiryStatus::parse)
            .transpose()?;
        Ok(InquiryFilter { status })
    }
}

/// `GET /api/images/resolve?ref=&type=`
#[derive(Debug, Default, Deserialize)]
pub struct ResolveParams {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub hint: Option<String>,
}

impl ResolveParams {
    /// Unknown hints are ignored rather than rejected.
    pub fn parent(&self) -> Option<ImageParent> {
        self.hint.as_deref().and_then(ImageParent::from_hint)
    }
}
