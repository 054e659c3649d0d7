//! Local filesystem artifact storage.
//!
//! The worker is the single writer, rewriting the artifact once per cycle.
//! Any number of independent readers may serve the file; the write-then-rename
//! discipline keeps a partial document from ever being observable.

use std::path::{Path, PathBuf};

use atom_syndication::Feed;
use chrono::{DateTime, Utc};
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Status summary of the persisted feed artifact.
#[derive(Debug, Clone)]
pub struct ArtifactStatus {
    pub path: PathBuf,
    pub exists: bool,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// Writes the feed artifact to a fixed path, atomically.
#[derive(Debug, Clone)]
pub struct FeedStore {
    path: PathBuf,
}

impl FeedStore {
    /// Create a store targeting the given artifact path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the feed and replace the artifact.
    pub async fn write_feed(&self, feed: &Feed) -> Result<()> {
        let bytes = feed.write_to(Vec::new())?;
        self.write_bytes(&bytes).await
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Report existence, size and modification time of the artifact.
    pub async fn status(&self) -> Result<ArtifactStatus> {
        match tokio::fs::metadata(&self.path).await {
            Ok(metadata) => Ok(ArtifactStatus {
                path: self.path.clone(),
                exists: true,
                size: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ArtifactStatus {
                path: self.path.clone(),
                exists: false,
                size: 0,
                modified: None,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Config;
    use crate::pipeline::build_feed;
    use tempfile::TempDir;

    #[tokio::test]
    async fn write_feed_creates_artifact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog_rss.xml");
        let store = FeedStore::new(&path);

        let feed = build_feed(&Config::default(), &[]);
        store.write_feed(&feed).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<feed"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn write_feed_replaces_previous_artifact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog_rss.xml");
        let store = FeedStore::new(&path);

        std::fs::write(&path, "stale").unwrap();

        let feed = build_feed(&Config::default(), &[]);
        store.write_feed(&feed).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.starts_with("<?xml"));
    }

    #[tokio::test]
    async fn write_creates_missing_output_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/feeds/blog_rss.xml");
        let store = FeedStore::new(&path);

        let feed = build_feed(&Config::default(), &[]);
        store.write_feed(&feed).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn status_reports_missing_artifact() {
        let tmp = TempDir::new().unwrap();
        let store = FeedStore::new(tmp.path().join("blog_rss.xml"));

        let status = store.status().await.unwrap();
        assert!(!status.exists);
        assert_eq!(status.size, 0);
        assert!(status.modified.is_none());
    }

    #[tokio::test]
    async fn status_reports_written_artifact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog_rss.xml");
        let store = FeedStore::new(&path);

        let feed = build_feed(&Config::default(), &[]);
        store.write_feed(&feed).await.unwrap();

        let status = store.status().await.unwrap();
        assert!(status.exists);
        assert!(status.size > 0);
        assert!(status.modified.is_some());
    }
}
