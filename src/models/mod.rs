// src/models/mod.rs

//! Domain models for the feed generator.

mod config;
mod entry;

pub use config::{Config, FeedConfig, OutputConfig, TickerConfig};
pub use entry::{Entry, Heading};

use chrono::{DateTime, Utc};

/// Summary of one completed pipeline cycle.
#[derive(Debug)]
pub struct CycleStats {
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub page_total: usize,
    pub fetch_failures: usize,
    pub extract_failures: usize,
    pub entries_kept: usize,
    pub artifact_written: bool,
}
