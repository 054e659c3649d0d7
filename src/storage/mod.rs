// src/storage/mod.rs

//! Persistence of the feed artifact.

mod local;

pub use local::{ArtifactStatus, FeedStore};
