//! Utility functions and helpers.

pub mod http;
pub mod url;

use chrono::{FixedOffset, NaiveDate, Utc};

/// Fixed Central Standard Time offset (UTC-6, never daylight-adjusted).
pub fn central_offset() -> FixedOffset {
    FixedOffset::west_opt(6 * 3600).expect("UTC-6 is a valid offset")
}

/// Today's date in fixed Central time, the default window reference.
pub fn today_central() -> NaiveDate {
    Utc::now().with_timezone(&central_offset()).date_naive()
}
