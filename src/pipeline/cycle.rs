// src/pipeline/cycle.rs

//! Cycle orchestration and the hourly worker loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};

use crate::error::Result;
use crate::models::{Config, CycleStats};
use crate::pipeline::dedup::dedup_entries;
use crate::pipeline::feed::build_feed;
use crate::services::TickerScraper;
use crate::storage::FeedStore;
use crate::utils::today_central;
use crate::utils::url::day_page_urls;

/// Run one scrape -> extract -> dedup -> publish cycle.
///
/// Per-URL failures are handled inside the scraper and only reduce the entry
/// count. A failed artifact write is logged and leaves the previous artifact
/// in place; the cycle still completes.
pub async fn run_cycle(
    config: &Config,
    scraper: &TickerScraper,
    store: &FeedStore,
    reference: NaiveDate,
) -> Result<CycleStats> {
    let started = Utc::now();

    let urls = day_page_urls(&config.ticker.base_url, reference, config.ticker.window_days);
    log::info!("Scraping {} day pages, window ending {}", urls.len(), reference);

    let outcome = scraper.fetch_window(&urls).await;
    let entries = dedup_entries(outcome.entries);
    log::info!("{} bulletins survive deduplication", entries.len());

    let feed = build_feed(config, &entries);
    let artifact_written = match store.write_feed(&feed).await {
        Ok(()) => {
            log::info!("Feed artifact written to {}", store.path().display());
            true
        }
        Err(error) => {
            // Previous artifact stays in place; the next cycle rebuilds from scratch.
            log::error!("Failed to write feed artifact: {}", error);
            false
        }
    };

    Ok(CycleStats {
        started,
        finished: Utc::now(),
        page_total: outcome.page_total,
        fetch_failures: outcome.fetch_failures,
        extract_failures: outcome.extract_failures,
        entries_kept: entries.len(),
        artifact_written,
    })
}

/// Drive cycles forever.
///
/// Sleeps the full interval after a completed cycle and a short cooldown
/// after a failed one. There is no graceful-shutdown path; the process is
/// stopped externally.
pub async fn run_loop(
    config: Arc<Config>,
    scraper: &TickerScraper,
    store: &FeedStore,
) -> Result<()> {
    loop {
        let reference = today_central();
        match run_cycle(&config, scraper, store, reference).await {
            Ok(stats) => {
                log::info!(
                    "Cycle complete: {} pages, {} fetch failures, {} extract failures, {} entries kept{}",
                    stats.page_total,
                    stats.fetch_failures,
                    stats.extract_failures,
                    stats.entries_kept,
                    if stats.artifact_written {
                        ""
                    } else {
                        " (artifact not updated)"
                    },
                );
                log::info!(
                    "Sleeping {}s until next cycle",
                    config.ticker.cycle_interval_secs
                );
                tokio::time::sleep(Duration::from_secs(config.ticker.cycle_interval_secs)).await;
            }
            Err(error) => {
                log::error!(
                    "Cycle failed: {}. Retrying in {}s",
                    error,
                    config.ticker.retry_cooldown_secs
                );
                tokio::time::sleep(Duration::from_secs(config.ticker.retry_cooldown_secs)).await;
            }
        }
    }
}
