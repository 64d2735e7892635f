//! Detail page extraction
//!
//! This module turns one vessel detail page into a `VesselRecord`:
//! - the photo URL comes from an `<img>` lookup
//! - every other field comes from label/terminator rules over the page text
//! - sanction sentences are collected by a dedicated pattern
//!
//! A rule that finds nothing leaves its field empty; extraction itself never fails.

mod category;
pub mod rules;
mod sanctions;
mod text;

pub use category::{category_path, CATEGORY_SEPARATOR};
pub use rules::{apply_rules, Field, TextRule, RULES};
pub use sanctions::extract_sanctions;
pub use text::{find_photo_url, flatten_text};

use crate::crawler::{FetchError, PageFetcher};
use crate::model::VesselRecord;
use scraper::Html;
use url::Url;

/// Extracts a vessel record from a detail page's HTML
///
/// This is a pure function of the page content; the returned record's `url`
/// is left empty.
///
/// # Example
///
/// ```
/// use shadow_fleet_scraper::extract::extract_vessel;
/// use url::Url;
///
/// let origin = Url::parse("https://war-sanctions.gur.gov.ua").unwrap();
/// let record = extract_vessel("<p>IMO 9187629</p>", &origin);
/// assert_eq!(record.imo, "9187629");
/// assert_eq!(record.vessel_name, "");
/// ```
pub fn extract_vessel(html: &str, origin: &Url) -> VesselRecord {
    let document = Html::parse_document(html);
    let mut record = VesselRecord::default();

    if let Some(photo) = find_photo_url(&document, origin) {
        record.vessel_photo_url = photo;
    }

    let text = flatten_text(&document);
    apply_rules(&text, &mut record);
    record.sanctions = extract_sanctions(&text);

    record
}

/// Fetches a detail page and extracts its vessel record
///
/// Only the fetch can fail; the record carries the page URL.
pub async fn scrape_vessel<F: PageFetcher>(
    fetcher: &F,
    url: &str,
    origin: &Url,
) -> Result<VesselRecord, FetchError> {
    let body = fetcher.fetch(url).await?;
    let mut record = extract_vessel(&body, origin);
    record.url = url.to_string();
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_PAGE: &str = r#"<html><head><title>ARLAN</title></head>
<body>
<img src="/static/logo.svg">
<img src="/uploads/vessels/arlan.jpg">
<div class="fields">
<dt>Vessel name</dt><dd>ARLAN</dd>
<dt>Category</dt>
<dd>
Shadow fleet
Tankers carrying Russian oil
On March 1, 2023, sanctions were imposed
</dd>
<dt>IMO</dt><dd>9187629</dd>
<dt>Flag (Current)</dt><dd>Cameroon</dd>
<dt>MMSI</dt><dd>613003602</dd>
<dt>Vessel Type</dt><dd>Crude Oil Tanker</dd>
<dt>Length</dt><dd>243 m</dd>
</div>
<h2>Justification</h2>
<p>The tanker transported Russian crude oil above the price cap.</p>
<p>On January 5, 2023, the European Union imposed sanctions on this vessel.</p>
<p>Since May 9, 2024, the United Kingdom applied sanctions against the tanker.</p>
<h2>Visited ports</h2>
<p>Primorsk</p>
<p>On January 5, 2023, the European Union imposed sanctions on this vessel.</p>
</body></html>"#;

    fn origin() -> Url {
        Url::parse("https://war-sanctions.gur.gov.ua").unwrap()
    }

    #[test]
    fn test_full_page() {
        let record = extract_vessel(DETAIL_PAGE, &origin());

        assert_eq!(record.vessel_name, "ARLAN");
        assert_eq!(record.imo, "9187629");
        assert_eq!(record.mmsi, "613003602");
        assert_eq!(record.flag, "Cameroon");
        assert_eq!(record.vessel_type, "Crude Oil Tanker");
        assert_eq!(
            record.category,
            "Shadow fleet → Tankers carrying Russian oil"
        );
        assert_eq!(
            record.vessel_photo_url,
            "https://war-sanctions.gur.gov.ua/uploads/vessels/arlan.jpg"
        );
        assert_eq!(
            record.sanctions,
            vec![
                "On January 5, 2023, the European Union imposed sanctions on this vessel."
                    .to_string(),
                "Since May 9, 2024, the United Kingdom applied sanctions against the tanker."
                    .to_string(),
            ]
        );
        assert!(record
            .vessel_information
            .starts_with("The tanker transported Russian crude oil above the price cap."));
        assert!(!record.vessel_information.contains("Primorsk"));
        assert_eq!(record.url, "");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_vessel(DETAIL_PAGE, &origin());
        let second = extract_vessel(DETAIL_PAGE, &origin());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_imo_does_not_abort_other_fields() {
        let page = DETAIL_PAGE.replace("<dt>IMO</dt><dd>9187629</dd>", "");
        let record = extract_vessel(&page, &origin());

        assert_eq!(record.imo, "");
        assert_eq!(record.vessel_name, "ARLAN");
        assert_eq!(record.mmsi, "613003602");
        assert_eq!(record.flag, "Cameroon");
        assert_eq!(record.sanctions.len(), 2);
    }

    #[test]
    fn test_inline_script_does_not_shadow_fields() {
        let page = DETAIL_PAGE.replace(
            "<head><title>ARLAN</title></head>",
            r#"<head><title>ARLAN</title>
<script>var meta = ["IMO 1111111", "MMSI 222", "Vessel name DECOY Category"];</script>
<style>.Category { display: block; }</style>
</head>"#,
        );
        let record = extract_vessel(&page, &origin());

        assert_eq!(record, extract_vessel(DETAIL_PAGE, &origin()));
        assert_eq!(record.imo, "9187629");
        assert_eq!(record.mmsi, "613003602");
        assert_eq!(record.vessel_name, "ARLAN");
        assert_eq!(
            record.category,
            "Shadow fleet → Tankers carrying Russian oil"
        );
    }

    #[test]
    fn test_empty_page_gives_empty_record() {
        let record = extract_vessel("<html><body></body></html>", &origin());
        assert_eq!(record, VesselRecord::default());
    }
}
