//! Remaining-work computation for resumed runs

use crate::model::{VesselListing, VesselRecord};
use std::collections::HashSet;

/// Returns the listings that still need scraping, in listing order
///
/// A listing is done when some processed record carries its URL. Records written
/// before URLs were stored have an empty `url`; for those the only available
/// correspondence is position, so the first *k* listings count as done, where
/// *k* is the number of such records. That fallback is only correct if the
/// listing order has not changed since they were written.
pub fn pending_listings(
    listings: &[VesselListing],
    processed: &[VesselRecord],
) -> Vec<VesselListing> {
    let done_urls: HashSet<&str> = processed
        .iter()
        .map(|record| record.url.as_str())
        .filter(|url| !url.is_empty())
        .collect();
    let positional = processed.iter().filter(|r| r.url.is_empty()).count();

    if positional > 0 {
        tracing::warn!(
            "{} checkpoint records have no URL; treating the first {} listings as scraped",
            positional,
            positional
        );
    }

    listings
        .iter()
        .enumerate()
        .filter(|(index, listing)| {
            *index >= positional && !done_urls.contains(listing.url.as_str())
        })
        .map(|(_, listing)| listing.clone())
        .collect()
}
