//! Scrape coordinator - resume and checkpoint orchestration
//!
//! This module contains the main scrape loop, including:
//! - Obtaining the current vessel listing (enumerated or from the listing file)
//! - Loading the checkpoint and computing what is left to scrape
//! - Fetching detail pages one at a time with a politeness pause
//! - Flushing the checkpoint periodically and at the end of the run

use crate::checkpoint::{load_listing, pending_listings, save_listing, CheckpointStore};
use crate::config::Config;
use crate::crawler::fetcher::{FetchError, HttpFetcher, PageFetcher};
use crate::crawler::listing::{enumerate_listings, ListingSite};
use crate::extract::scrape_vessel;
use crate::model::{VesselListing, VesselRecord};
use crate::output::RunReport;
use chrono::Utc;
use std::path::Path;

/// Switches for a single run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Ignore the existing checkpoint and scrape every listed vessel
    pub fresh: bool,

    /// Read the listing file instead of enumerating (enumerates and writes it
    /// when the file does not exist yet)
    pub from_listing: bool,

    /// Stop after computing the remaining work
    pub dry_run: bool,
}

/// Main scraper coordinator structure
pub struct Coordinator<F> {
    config: Config,
    site: ListingSite,
    fetcher: F,
    store: CheckpointStore,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that talks to the configured origin over HTTP
    pub fn new(config: Config) -> crate::Result<Self> {
        let fetcher = HttpFetcher::new(&config.http)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a coordinator around any page source
    pub fn with_fetcher(config: Config, fetcher: F) -> crate::Result<Self> {
        let site = ListingSite::from_config(&config.site)?;
        let store = CheckpointStore::new(&config.output.checkpoint_path);

        Ok(Self {
            config,
            site,
            fetcher,
            store,
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn store(&self) -> &CheckpointStore {
        &self.store
    }

    /// Walks the listing pages
    pub async fn enumerate(&self) -> Vec<VesselListing> {
        enumerate_listings(
            &self.fetcher,
            &self.site,
            self.config.politeness.page_delay(),
        )
        .await
    }

    /// Enumerates the listing and writes it to the listing file
    pub async fn export_listing(&self) -> crate::Result<Vec<VesselListing>> {
        let listings = self.enumerate().await;
        let path = Path::new(&self.config.output.listing_path);
        save_listing(path, &listings)?;
        tracing::info!("Saved {} vessels to {}", listings.len(), path.display());
        Ok(listings)
    }

    /// Scrapes a single detail page
    pub async fn scrape_one(&self, url: &str) -> Result<VesselRecord, FetchError> {
        scrape_vessel(&self.fetcher, url, &self.site.origin).await
    }

    async fn listings(&self, from_listing: bool) -> crate::Result<Vec<VesselListing>> {
        if !from_listing {
            return Ok(self.enumerate().await);
        }

        let path = Path::new(&self.config.output.listing_path);
        match load_listing(path)? {
            Some(listings) => {
                tracing::info!("Loaded {} vessels from {}", listings.len(), path.display());
                Ok(listings)
            }
            None => {
                tracing::info!("No listing file at {}, enumerating", path.display());
                self.export_listing().await
            }
        }
    }

    /// Runs one scrape pass
    ///
    /// This is the core scraping logic that:
    /// 1. Obtains the current listing
    /// 2. Loads the checkpoint (a malformed checkpoint aborts the run)
    /// 3. Scrapes every listing the checkpoint does not cover yet
    /// 4. Rewrites the checkpoint every `checkpoint_every` successes and at the end
    ///
    /// A vessel whose page cannot be fetched is reported and skipped. Checkpoint
    /// read and write errors end the run.
    pub async fn run(&self, options: &RunOptions) -> crate::Result<RunReport> {
        let started_at = Utc::now();

        let listings = self.listings(options.from_listing).await?;
        if listings.is_empty() {
            tracing::warn!("Listing returned no vessels");
        }

        let previous = if options.fresh {
            tracing::info!(
                "Fresh run: ignoring checkpoint at {}",
                self.store.path().display()
            );
            Vec::new()
        } else {
            self.store.load()?
        };

        let pending = pending_listings(&listings, &previous);
        tracing::info!(
            "{} vessels listed, {} already scraped, {} remaining",
            listings.len(),
            previous.len(),
            pending.len()
        );

        let mut report = RunReport {
            started_at,
            finished_at: started_at,
            listed: listings.len(),
            previously_scraped: previous.len(),
            pending: pending.len(),
            new_vessels: 0,
            total_vessels: previous.len(),
            failed_urls: Vec::new(),
            dry_run: options.dry_run,
        };

        if options.dry_run || pending.is_empty() {
            if pending.is_empty() {
                tracing::info!("All vessels already scraped");
            }
            report.finished_at = Utc::now();
            return Ok(report);
        }

        let mut records = previous;
        let base = records.len();
        let checkpoint_every = self.config.output.checkpoint_every.max(1);
        let detail_delay = self.config.politeness.detail_delay();
        let total = pending.len();

        for (index, listing) in pending.iter().enumerate() {
            tracing::info!("[{}/{}] Scraping vessel {}", index + 1, total, listing.id);

            match scrape_vessel(&self.fetcher, &listing.url, &self.site.origin).await {
                Ok(record) => {
                    tracing::info!("  ✓ {}", record.summary());
                    records.push(record);

                    if (records.len() - base) % checkpoint_every == 0 {
                        self.store.save(&records)?;
                        tracing::info!("Checkpoint saved: {} vessels", records.len());
                    }
                }
                Err(e) => {
                    tracing::warn!("  ✗ Failed to scrape {}: {}", listing.url, e);
                    report.failed_urls.push(listing.url.clone());
                }
            }

            if index + 1 < total {
                tokio::time::sleep(detail_delay).await;
            }
        }

        self.store.save(&records)?;
        tracing::info!(
            "Saved {} vessels to {}",
            records.len(),
            self.store.path().display()
        );

        report.new_vessels = records.len() - base;
        report.total_vessels = records.len();
        report.finished_at = Utc::now();
        Ok(report)
    }
}
