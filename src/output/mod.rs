//! Output module for run reporting
//!
//! This module handles:
//! - Summarising a scrape run (counts, failures, timing)
//! - Printing that summary to the console

mod report;

pub use report::{print_report, RunReport, FAILURE_PREVIEW_LEN};
