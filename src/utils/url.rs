// src/utils/url.rs

//! Day-page URL generation.

use chrono::{Datelike, Duration, NaiveDate};

/// Build the day-page URLs for a trailing window, oldest first.
///
/// One URL per calendar day, from `window_days - 1` days before `reference`
/// up to and including `reference` itself. Pure function; deterministic given
/// its inputs.
pub fn day_page_urls(base_url: &str, reference: NaiveDate, window_days: u32) -> Vec<String> {
    (0..window_days)
        .rev()
        .map(|offset| {
            let date = reference - Duration::days(i64::from(offset));
            format!(
                "{}?mo={:02}&da={:02}&yr={:04}",
                base_url,
                date.month(),
                date.day(),
                date.year()
            )
        })
        .collect()
}
