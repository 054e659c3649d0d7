// src/pipeline/feed.rs

//! Atom feed assembly.

use atom_syndication::{
    ContentBuilder, EntryBuilder, Feed, FeedBuilder, Link, LinkBuilder, Person, PersonBuilder,
    Text,
};
use chrono::Utc;

use crate::models::{Config, Entry};
use crate::utils::central_offset;

/// Build the feed document from the deduplicated entries, oldest first.
///
/// Feed-level metadata comes from the configuration; each surviving bulletin
/// becomes one item whose id equals its link.
pub fn build_feed(config: &Config, entries: &[Entry]) -> Feed {
    let author = feed_author(&config.feed.author_name, &config.feed.author_email);

    let items: Vec<atom_syndication::Entry> = entries
        .iter()
        .filter_map(|entry| {
            let heading = entry.heading.as_ref()?;
            Some(
                EntryBuilder::default()
                    .title(Text::plain(heading.title.clone()))
                    .id(entry.source_url.clone())
                    .links(vec![self_link(&entry.source_url)])
                    .authors(vec![author.clone()])
                    .published(Some(heading.published))
                    .updated(heading.published)
                    .content(Some(
                        ContentBuilder::default()
                            .value(Some(entry.content.clone()))
                            .content_type(Some("html".to_string()))
                            .build(),
                    ))
                    .build(),
            )
        })
        .collect();

    // The newest bulletin is last; an empty feed is stamped with the build time.
    let updated = items
        .last()
        .and_then(|item| item.published().copied())
        .unwrap_or_else(|| Utc::now().with_timezone(&central_offset()));

    FeedBuilder::default()
        .title(Text::plain(config.feed.title.clone()))
        .id(config.feed.link.clone())
        .links(vec![self_link(&config.feed.link)])
        .subtitle(Some(Text::plain(config.feed.description.clone())))
        .authors(vec![author])
        .rights(Some(Text::plain(config.feed.rights.clone())))
        .updated(updated)
        .entries(items)
        .build()
}

fn feed_author(name: &str, email: &str) -> Person {
    PersonBuilder::default()
        .name(name.to_string())
        .email(Some(email.to_string()))
        .build()
}

fn self_link(href: &str) -> Link {
    LinkBuilder::default()
        .href(href.to_string())
        .rel("self".to_string())
        .build()
}
