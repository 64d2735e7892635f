//! End-of-run report
//!
//! This module provides the summary a scrape run returns and its console
//! rendering.

use chrono::{DateTime, Utc};

/// How many failed URLs the report lists before collapsing the rest
pub const FAILURE_PREVIEW_LEN: usize = 10;

/// Outcome of one scrape run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Vessels on the current listing
    pub listed: usize,

    /// Records already in the checkpoint when the run started
    pub previously_scraped: usize,

    /// Listings this run had to scrape
    pub pending: usize,

    /// Records added by this run
    pub new_vessels: usize,

    /// Records in the checkpoint after the run
    pub total_vessels: usize,

    /// Detail pages that could not be fetched, in the order attempted
    pub failed_urls: Vec<String>,

    /// True when no detail page was fetched on purpose
    pub dry_run: bool,
}

impl RunReport {
    /// The first failed URLs and how many more were left out
    pub fn failure_preview(&self) -> (&[String], usize) {
        let shown = self.failed_urls.len().min(FAILURE_PREVIEW_LEN);
        (&self.failed_urls[..shown], self.failed_urls.len() - shown)
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Prints the report to stdout
pub fn print_report(report: &RunReport) {
    if report.dry_run {
        println!("=== Shadow Fleet Dry Run ===\n");
    } else {
        println!("=== Shadow Fleet Scrape Complete ===\n");
    }

    println!("Listing:");
    println!("  Vessels listed: {}", report.listed);
    println!("  Previously scraped: {}", report.previously_scraped);
    println!("  Remaining: {}", report.pending);
    println!();

    if report.dry_run {
        println!("✓ Would scrape {} vessels", report.pending);
        return;
    }

    println!("Results:");
    println!("  New vessels scraped: {}", report.new_vessels);
    println!("  Total vessels: {}", report.total_vessels);
    println!("  Failed: {}", report.failed_urls.len());
    println!("  Duration: {}s", report.duration_seconds());

    let (shown, more) = report.failure_preview();
    if !shown.is_empty() {
        println!("\nFailed URLs:");
        for url in shown {
            println!("  - {}", url);
        }
        if more > 0 {
            println!("  ... and {} more", more);
        }
    }
}
