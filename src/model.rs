//! Vessel data types shared by the enumerator, extractor, and checkpoint store

use serde::{Deserialize, Serialize};

/// A vessel detail-page link discovered on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselListing {
    /// Final path segment of `url`
    pub id: String,

    /// Absolute detail-page URL; the uniqueness key
    pub url: String,

    /// Short text shown for the vessel on the listing page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl VesselListing {
    /// Creates a listing, deriving the id from the URL's last path segment
    pub fn new(url: impl Into<String>, preview: Option<String>) -> Self {
        let url = url.into();
        let id = crate::url::vessel_id(&url);
        Self { id, url, preview }
    }
}

/// The persisted unit of the checkpoint file
///
/// Every field defaults to empty, so a record is well-formed even when every
/// extraction rule misses, and files written before `url` was recorded still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselRecord {
    /// Detail-page URL the record was scraped from
    pub url: String,

    pub vessel_name: String,

    #[serde(rename = "IMO")]
    pub imo: String,

    #[serde(rename = "MMSI")]
    pub mmsi: String,

    pub flag: String,

    pub vessel_type: String,

    /// Up to two category segments joined by " → "
    pub category: String,

    pub vessel_photo_url: String,

    /// Distinct sanction sentences in order of appearance
    pub sanctions: Vec<String>,

    /// Free-text justification block
    pub vessel_information: String,
}

impl VesselRecord {
    /// Short one-line description used in progress logs
    pub fn summary(&self) -> String {
        let name = if self.vessel_name.is_empty() {
            "Unknown"
        } else {
            &self.vessel_name
        };
        let imo = if self.imo.is_empty() { "N/A" } else { &self.imo };
        format!("{} - IMO: {}", name, imo)
    }
}
