//! Bulletin entry data structures.

use chrono::{DateTime, FixedOffset};

/// Parsed bulletin heading.
///
/// Title and publish date come from a single pattern match over the bulletin
/// text, so they are always present together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Bulletin title, the line following the banner and date
    pub title: String,

    /// Midnight of the bulletin date, fixed UTC-6 (no daylight adjustment)
    pub published: DateTime<FixedOffset>,
}

/// One bulletin extracted from a single day page.
///
/// Entries live for one cycle only; they are never persisted or carried
/// across cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Heading, absent when the page text did not match the banner pattern
    pub heading: Option<Heading>,

    /// HTML fragment of the bulletin body, hyperlinks already rewritten to
    /// inline images
    pub content: String,

    /// Day-page URL the bulletin was fetched from
    pub source_url: String,
}

impl Entry {
    /// Bulletin title, if the heading pattern matched.
    pub fn title(&self) -> Option<&str> {
        self.heading.as_ref().map(|heading| heading.title.as_str())
    }
}
