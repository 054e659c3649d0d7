// src/utils/http.rs

//! HTTP client utilities.

use reqwest::Client;

use crate::error::Result;
use crate::models::TickerConfig;

/// Create the shared HTTP client with the fixed identifying User-Agent.
///
/// No request timeout is configured; fetches rely on the transport defaults.
pub fn create_client(config: &TickerConfig) -> Result<Client> {
    let client = Client::builder().user_agent(&config.user_agent).build()?;
    Ok(client)
}

/// Fetch a single page, failing on transport errors and non-success statuses.
///
/// No retry happens here; the caller decides whether to skip or abort.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
