//! Listing page enumeration
//!
//! Walks the paginated listing and collects vessel detail-page links:
//! - `<a href>` targets under the listing's directory are candidates
//! - the bare listing URL and pagination links are skipped
//! - relative targets are made absolute against the site origin
//! - a page that adds no new URL ends the walk

use crate::config::SiteConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::model::VesselListing;
use crate::url::{has_page_param, listing_page_url, listing_segment, parse_origin, resolve_href};
use crate::{UrlError, UrlResult};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Parsed listing location
#[derive(Debug, Clone)]
pub struct ListingSite {
    /// Scheme and host every relative link is resolved against
    pub origin: Url,
    /// Absolute URL of page 1
    pub listing_url: Url,
    /// Path of the listing as written in hrefs
    pub listing_path: String,
    /// Substring marking a detail-page href, e.g. `/shadow-fleet/`
    pub link_marker: String,
    pub max_pages: u32,
}

impl ListingSite {
    pub fn from_config(config: &SiteConfig) -> UrlResult<Self> {
        let origin = parse_origin(&config.origin)?;
        let listing_url = origin
            .join(&config.listing_path)
            .map_err(|e| UrlError::Parse(e.to_string()))?;
        let link_marker = format!("/{}/", listing_segment(&config.listing_path));

        Ok(Self {
            origin,
            listing_url,
            listing_path: config.listing_path.clone(),
            link_marker,
            max_pages: config.max_pages,
        })
    }

    fn is_listing_itself(&self, absolute: &str) -> bool {
        absolute.trim_end_matches('/') == self.listing_url.as_str().trim_end_matches('/')
    }
}

/// Extracts vessel links from one listing page, in document order
///
/// Duplicates within the page are kept; the enumerator deduplicates across the
/// whole run.
pub fn parse_listing_page(html: &str, site: &ListingSite) -> Vec<VesselListing> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return listings;
    };

    for element in document.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if !href.contains(&site.link_marker) || href == site.listing_path {
            continue;
        }

        let Some(absolute) = resolve_href(href, &site.origin) else {
            continue;
        };

        // Pagination controls live under the same directory
        if has_page_param(&absolute) || site.is_listing_itself(&absolute) {
            continue;
        }

        listings.push(VesselListing::new(absolute, link_preview(&element)));
    }

    listings
}

/// Text shown for a vessel on the listing page
fn link_preview(link: &ElementRef) -> Option<String> {
    let details = Selector::parse("div.vessel-details")
        .ok()
        .and_then(|selector| link.select(&selector).next());
    let source = details.unwrap_or(*link);

    let text = source
        .text()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (!text.is_empty()).then_some(text)
}

/// Enumerates every vessel on the listing
///
/// Fetches pages `1..=max_pages` in order, pausing `page_delay` between pages.
/// Stops early when a page contributes no new URL or when a page cannot be
/// fetched; in the latter case the listings collected so far are returned.
pub async fn enumerate_listings<F: PageFetcher>(
    fetcher: &F,
    site: &ListingSite,
    page_delay: Duration,
) -> Vec<VesselListing> {
    let mut listings: Vec<VesselListing> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for page in 1..=site.max_pages {
        let url = listing_page_url(&site.listing_url, page);
        tracing::info!("Fetching vessel list page {}/{}", page, site.max_pages);

        let body = match fetcher.fetch(url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    "Error fetching page {}: {}; keeping {} vessels",
                    page,
                    e,
                    listings.len()
                );
                break;
            }
        };

        let mut found = 0;
        for listing in parse_listing_page(&body, site) {
            if seen.insert(listing.url.clone()) {
                listings.push(listing);
                found += 1;
            }
        }

        tracing::info!(
            "Found {} new vessels on page {} (total: {})",
            found,
            page,
            listings.len()
        );

        if found == 0 {
            tracing::info!("No more vessels found, stopping at page {}", page);
            break;
        }

        if page < site.max_pages {
            tokio::time::sleep(page_delay).await;
        }
    }

    listings
}
