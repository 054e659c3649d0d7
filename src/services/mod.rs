// src/services/mod.rs

//! Scraping and extraction services.

pub mod extract;
mod scrape;

pub use scrape::{TickerScraper, WindowOutcome};
