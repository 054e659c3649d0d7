//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Scraping behavior and scheduling settings
    #[serde(default)]
    pub ticker: TickerConfig,

    /// Fixed feed-level metadata
    #[serde(default)]
    pub feed: FeedConfig,

    /// Artifact output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply environment-variable overrides.
    ///
    /// `TICKER_DAYS` overrides the trailing-window size and `RSS_FOLDER`
    /// overrides the output directory.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(days) = std::env::var("TICKER_DAYS") {
            self.ticker.window_days = days.trim().parse().map_err(|e| {
                AppError::config(format!("invalid TICKER_DAYS value {days:?}: {e}"))
            })?;
        }
        if let Ok(folder) = std::env::var("RSS_FOLDER") {
            self.output.dir = PathBuf::from(folder);
        }
        Ok(())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.ticker.window_days == 0 {
            return Err(AppError::config("ticker.window_days must be >= 1"));
        }
        if self.ticker.user_agent.trim().is_empty() {
            return Err(AppError::config("ticker.user_agent is empty"));
        }
        Url::parse(&self.ticker.base_url)
            .map_err(|e| AppError::config(format!("ticker.base_url is not a valid URL: {e}")))?;
        if self.feed.title.trim().is_empty() {
            return Err(AppError::config("feed.title is empty"));
        }
        if self.feed.link.trim().is_empty() {
            return Err(AppError::config("feed.link is empty"));
        }
        if self.output.filename.trim().is_empty() {
            return Err(AppError::config("output.filename is empty"));
        }
        Ok(())
    }
}

/// Scraping and scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Base URL of the day-page endpoint
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Fixed identifying User-Agent header for all requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Trailing window of calendar days fetched per cycle
    #[serde(default = "defaults::window_days")]
    pub window_days: u32,

    /// Delay between consecutive page requests in seconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_secs: u64,

    /// Sleep between completed cycles in seconds
    #[serde(default = "defaults::cycle_interval")]
    pub cycle_interval_secs: u64,

    /// Cooldown before retrying a failed cycle in seconds
    #[serde(default = "defaults::retry_cooldown")]
    pub retry_cooldown_secs: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            window_days: defaults::window_days(),
            request_delay_secs: defaults::request_delay(),
            cycle_interval_secs: defaults::cycle_interval(),
            retry_cooldown_secs: defaults::retry_cooldown(),
        }
    }
}

/// Fixed feed-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "defaults::feed_title")]
    pub title: String,

    /// Canonical feed link, also used as the feed id
    #[serde(default = "defaults::feed_link")]
    pub link: String,

    #[serde(default = "defaults::feed_description")]
    pub description: String,

    #[serde(default = "defaults::author_name")]
    pub author_name: String,

    #[serde(default = "defaults::author_email")]
    pub author_email: String,

    #[serde(default = "defaults::rights")]
    pub rights: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: defaults::feed_title(),
            link: defaults::feed_link(),
            description: defaults::feed_description(),
            author_name: defaults::author_name(),
            author_email: defaults::author_email(),
            rights: defaults::rights(),
        }
    }
}

/// Artifact output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the feed artifact is written into
    #[serde(default = "defaults::output_dir")]
    pub dir: PathBuf,

    /// Artifact file name within the output directory
    #[serde(default = "defaults::output_filename")]
    pub filename: String,
}

impl OutputConfig {
    /// Full path of the feed artifact.
    pub fn artifact_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            filename: defaults::output_filename(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Ticker defaults
    pub fn base_url() -> String {
        "https://ticker.mesonet.org/select.php".into()
    }
    pub fn user_agent() -> String {
        "ticker rss feed generator v0.x".into()
    }
    pub fn window_days() -> u32 {
        30
    }
    pub fn request_delay() -> u64 {
        3
    }
    pub fn cycle_interval() -> u64 {
        3600
    }
    pub fn retry_cooldown() -> u64 {
        300
    }

    // Feed defaults
    pub fn feed_title() -> String {
        "Oklahoma Mesonet Ticker".into()
    }
    pub fn feed_link() -> String {
        "https://ticker.mesonet.org/".into()
    }
    pub fn feed_description() -> String {
        "Latest Ticker".into()
    }
    pub fn author_name() -> String {
        "Gary McManus".into()
    }
    pub fn author_email() -> String {
        "gmcmanus@mesonet.org".into()
    }
    pub fn rights() -> String {
        "Copyright 2024 Oklahoma Climatological Survey".into()
    }

    // Output defaults
    pub fn output_dir() -> PathBuf {
        PathBuf::from(".")
    }
    pub fn output_filename() -> String {
        "blog_rss.xml".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_window() {
        let mut config = Config::default();
        config.ticker.window_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.ticker.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_invalid_base_url() {
        let mut config = Config::default();
        config.ticker.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("[ticker]\nwindow_days = 7\n").unwrap();
        assert_eq!(config.ticker.window_days, 7);
        assert_eq!(config.ticker.request_delay_secs, 3);
        assert_eq!(config.feed.title, "Oklahoma Mesonet Ticker");
        assert_eq!(config.output.filename, "blog_rss.xml");
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("ticker.toml");
        fs::write(&path, "[ticker\nwindow_days = 7\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn load_rejects_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(Config::load(tmp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn artifact_path_joins_dir_and_filename() {
        let output = OutputConfig {
            dir: PathBuf::from("/tmp/feeds"),
            filename: "blog_rss.xml".to_string(),
        };
        assert_eq!(
            output.artifact_path(),
            PathBuf::from("/tmp/feeds/blog_rss.xml")
        );
    }
}
