// src/pipeline/dedup.rs

//! Consecutive-duplicate removal.

use crate::models::Entry;

/// Collapse bulletins that the ticker re-displays unchanged across
/// consecutive days.
///
/// Entries without a heading (or with an empty title) are dropped
/// unconditionally. An entry whose title equals the title of the immediately
/// preceding surviving entry is dropped; the first occurrence is kept with
/// its original date and link. A title that reappears after at least one
/// differently-titled entry is kept.
pub fn dedup_entries(entries: Vec<Entry>) -> Vec<Entry> {
    let mut kept: Vec<Entry> = Vec::new();

    for entry in entries {
        let Some(title) = entry.title() else {
            continue;
        };
        if title.is_empty() {
            continue;
        }
        if kept.last().and_then(Entry::title) == Some(title) {
            continue;
        }
        kept.push(entry);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Heading;
    use crate::utils::central_offset;
    use chrono::TimeZone;

    fn entry(title: Option<&str>, day: u32) -> Entry {
        Entry {
            heading: title.map(|title| Heading {
                title: title.to_string(),
                published: central_offset()
                    .with_ymd_and_hms(2025, 8, day, 0, 0, 0)
                    .unwrap(),
            }),
            content: format!("<b>bulletin {day}</b>"),
            source_url: format!("https://t/s?mo=08&da={day:02}&yr=2025"),
        }
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().filter_map(Entry::title).collect()
    }

    #[test]
    fn collapses_consecutive_repeats() {
        let input = vec![
            entry(Some("A"), 1),
            entry(Some("A"), 2),
            entry(Some("B"), 3),
            entry(Some("B"), 4),
            entry(Some("B"), 5),
            entry(Some("C"), 6),
        ];
        let output = dedup_entries(input);
        assert_eq!(titles(&output), vec!["A", "B", "C"]);
    }

    #[test]
    fn first_occurrence_keeps_its_date_and_link() {
        let output = dedup_entries(vec![entry(Some("A"), 1), entry(Some("A"), 2)]);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].source_url, "https://t/s?mo=08&da=01&yr=2025");
        assert_eq!(
            output[0].heading.as_ref().unwrap().published.to_rfc3339(),
            "2025-08-01T00:00:00-06:00"
        );
    }

    #[test]
    fn drops_headingless_entries() {
        let input = vec![entry(Some("A"), 1), entry(None, 2), entry(Some("B"), 3)];
        let output = dedup_entries(input);
        assert_eq!(titles(&output), vec!["A", "B"]);
    }

    #[test]
    fn headingless_entry_does_not_break_adjacency() {
        // A headingless page sits between two identical titles; the repeat is
        // still adjacent among surviving entries and gets dropped.
        let input = vec![entry(Some("A"), 1), entry(None, 2), entry(Some("A"), 3)];
        let output = dedup_entries(input);
        assert_eq!(titles(&output), vec!["A"]);
    }

    #[test]
    fn non_adjacent_repeats_survive() {
        let input = vec![entry(Some("A"), 1), entry(Some("B"), 2), entry(Some("A"), 3)];
        let output = dedup_entries(input);
        assert_eq!(titles(&output), vec!["A", "B", "A"]);
    }

    #[test]
    fn empty_titles_are_dropped() {
        let input = vec![entry(Some(""), 1), entry(Some("A"), 2)];
        let output = dedup_entries(input);
        assert_eq!(titles(&output), vec!["A"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(dedup_entries(Vec::new()).is_empty());
    }
}
