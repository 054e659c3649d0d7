// src/services/scrape.rs

//! Ticker scraping service.
//!
//! Walks the day-page window one URL at a time, pacing requests against the
//! upstream server, and collects the bulletins that could be extracted.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::models::{Config, Entry};
use crate::services::extract::extract_bulletin;
use crate::utils::http::{create_client, fetch_page};

/// Summary of one pass over the day-page window.
#[derive(Debug, Default)]
pub struct WindowOutcome {
    pub entries: Vec<Entry>,
    pub page_total: usize,
    pub fetch_failures: usize,
    pub extract_failures: usize,
}

/// Service for scraping bulletins from ticker day pages.
pub struct TickerScraper {
    config: Arc<Config>,
    client: Client,
}

impl TickerScraper {
    /// Create a new scraper with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = create_client(&config.ticker)?;
        Ok(Self { config, client })
    }

    /// Fetch and extract every day page in order, oldest first.
    ///
    /// Pages are requested strictly sequentially with a fixed delay between
    /// requests. A failed fetch or a page without a bulletin block is logged
    /// and skipped; it never aborts the window.
    pub async fn fetch_window(&self, urls: &[String]) -> WindowOutcome {
        let delay = Duration::from_secs(self.config.ticker.request_delay_secs);
        let mut outcome = WindowOutcome {
            page_total: urls.len(),
            ..WindowOutcome::default()
        };

        for (index, url) in urls.iter().enumerate() {
            if index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let body = match fetch_page(&self.client, url).await {
                Ok(body) => body,
                Err(error) => {
                    outcome.fetch_failures += 1;
                    log::warn!("Failed to fetch {}: {}", url, error);
                    continue;
                }
            };

            match extract_bulletin(&body) {
                Ok(extracted) => {
                    let entry = extracted.assemble(url.clone());
                    match entry.title() {
                        Some(title) => log::info!("Found entry {:?} ({})", title, url),
                        None => log::debug!("Bulletin without heading at {}", url),
                    }
                    outcome.entries.push(entry);
                }
                Err(error) => {
                    outcome.extract_failures += 1;
                    log::warn!("No bulletin extracted from {}: {}", url, error);
                }
            }
        }

        outcome
    }
}
