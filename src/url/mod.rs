//! URL handling for the scraper
//!
//! This module provides origin parsing, listing page URL construction, link
//! resolution, and vessel id derivation.

mod normalize;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use normalize::{has_page_param, resolve_href, PAGE_PARAM};

/// Parses and validates a site origin
///
/// The origin must be an HTTP(S) URL with a host. Any path, query, or fragment is
/// discarded.
///
/// # Examples
///
/// ```
/// use shadow_fleet_scraper::url::parse_origin;
///
/// let origin = parse_origin("https://war-sanctions.gur.gov.ua/en").unwrap();
/// assert_eq!(origin.as_str(), "https://war-sanctions.gur.gov.ua/");
/// ```
pub fn parse_origin(origin: &str) -> UrlResult<Url> {
    let mut url = Url::parse(origin).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Builds the URL of one listing page
///
/// Page 1 is the bare listing URL; later pages carry a `page` query parameter.
pub fn listing_page_url(listing_url: &Url, page: u32) -> Url {
    let mut url = listing_url.clone();
    if page > 1 {
        url.query_pairs_mut()
            .append_pair(PAGE_PARAM, &page.to_string());
    }
    url
}

/// Derives a vessel id from a detail-page URL: its final path segment
pub fn vessel_id(url: &str) -> String {
    url.rsplit('/').next().unwrap_or_default().to_string()
}

/// Returns the final path segment of a listing path, used to recognise
/// detail-page links (`/en/transport/shadow-fleet` gives `shadow-fleet`)
pub fn listing_segment(listing_path: &str) -> &str {
    listing_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}
