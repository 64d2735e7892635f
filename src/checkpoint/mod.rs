//! Checkpoint module for persisting scrape progress
//!
//! This module handles:
//! - Reading and atomically rewriting the JSON checkpoint of scraped vessels
//! - Exporting and importing the enumerated vessel listing
//! - Computing which listings a resumed run still has to scrape

mod resume;
mod store;

pub use resume::pending_listings;
pub use store::{
    load_listing, save_listing, CheckpointError, CheckpointResult, CheckpointStore,
};
