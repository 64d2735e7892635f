//! Crawler module for page fetching and run coordination
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching behind the `PageFetcher` seam
//! - Listing pagination and vessel link collection
//! - Overall run coordination with checkpointing and resume

mod coordinator;
mod fetcher;
mod listing;

pub use coordinator::{Coordinator, RunOptions};
pub use fetcher::{build_http_client, FetchError, HttpFetcher, PageFetcher};
pub use listing::{enumerate_listings, parse_listing_page, ListingSite};
